//! The geometry at the heart of `rail`.
//!
//! This crate contains the pure half of a scrollbar: the conversions between
//! content coordinates (content length, viewport length, scroll offset) and
//! thumb coordinates (thumb length, thumb offset), with no mutable state and
//! no side effects. The stateful gesture handling lives in `rail_widget`.
pub mod animation;
pub mod time;

mod axis;
mod track;
mod vector;

pub use animation::{Animation, Easing};
pub use axis::Axis;
pub use track::{InvalidTrack, Thumb, Track};
pub use vector::Vector;
