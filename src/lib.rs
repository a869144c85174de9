//! `rail` is a framework-agnostic scrollbar: the position mapping and the
//! drag-gesture state machine of a draggable thumb, with rendering and event
//! wiring left to the host.
//!
//! The host owns the scrollable region. Each render it pushes the region's
//! geometry into a [`Scrollbar`] as a [`Track`] and draws the resulting
//! [`Thumb`]; on interaction it forwards pointer [`Event`]s and applies the
//! returned [`Command`]s to its content.
//!
//! # Example
//! ```
//! use rail::{Axis, Command, Event, Scrollbar, Track};
//!
//! // A 1000-unit document in a 200-unit viewport, scrolled to the top
//! let mut scrollbar = Scrollbar::new(Axis::Vertical, Track::new(1000.0, 200.0, 0.0, 20.0));
//!
//! // The thumb mirrors the visible fraction of the content
//! assert_eq!(scrollbar.thumb().length, 40.0);
//!
//! // Clicking the track jumps the content so the thumb centers on the click
//! assert_eq!(
//!     scrollbar.update(Event::TrackPressed { at: 100.0 }),
//!     Some(Command::ScrollTo(400.0)),
//! );
//! ```
pub use rail_core as core;
pub use rail_widget as widget;

pub use crate::core::{Animation, Axis, Easing, InvalidTrack, Thumb, Track, Vector};
pub use crate::widget::{Binding, Command, Drag, Event, EventSource, Scrollbar, Smoothed};

pub mod time {
    //! Keep track of time, both in native and web platforms.
    pub use crate::core::time::{Duration, Instant};
}
