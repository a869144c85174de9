//! Keep track of time, both in native and web platforms.
pub use web_time::{Duration, Instant};
