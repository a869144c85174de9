//! The stateful half of `rail`: a scrollbar that mirrors the scroll position
//! of an externally-owned region and lets the user change it by clicking or
//! dragging the thumb.
//!
//! The [`Scrollbar`] owns no rendering and no event loop. The host pushes
//! geometry each render and pointer events as they happen, and applies the
//! [`Command`]s it gets back to the real scrollable content.
pub use rail_core as core;

mod binding;
mod drag;
mod scrollbar;
mod smoothed;

pub use binding::{Binding, EventSource};
pub use drag::Drag;
pub use scrollbar::{Command, Event, Scrollbar};
pub use smoothed::Smoothed;
