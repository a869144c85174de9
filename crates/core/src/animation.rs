//! Animate your applications.
use crate::time::{Duration, Instant};

use lilt::{Animated, FloatRepresentable};

pub use lilt::Easing;

/// The animation of some particular state.
///
/// It tracks state changes and allows projecting interpolated values through
/// time.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct Animation<T>
where
    T: Clone + Copy + PartialEq + FloatRepresentable,
{
    raw: Animated<T, Instant>,
}

impl<T> Animation<T>
where
    T: Clone + Copy + PartialEq + FloatRepresentable,
{
    /// Creates a new [`Animation`] with the given initial state.
    pub fn new(state: T) -> Self {
        Self {
            raw: Animated::new(state),
        }
    }

    /// Sets the [`Easing`] function of the [`Animation`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.raw = self.raw.easing(easing);
        self
    }

    /// Sets the duration of the [`Animation`] to 100ms.
    pub fn very_quick(self) -> Self {
        self.duration(Duration::from_millis(100))
    }

    /// Sets the duration of the [`Animation`] to 200ms.
    pub fn quick(self) -> Self {
        self.duration(Duration::from_millis(200))
    }

    /// Sets the duration of the [`Animation`] to 500ms.
    pub fn slow(self) -> Self {
        self.duration(Duration::from_millis(500))
    }

    /// Sets the duration of the [`Animation`].
    pub fn duration(mut self, duration: Duration) -> Self {
        self.raw = self.raw.duration(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Sets a delay before the [`Animation`] starts.
    pub fn delay(mut self, duration: Duration) -> Self {
        self.raw = self.raw.delay(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time.
    pub fn go(mut self, new_state: T, at: Instant) -> Self {
        self.go_mut(new_state, at);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time, by
    /// reference.
    pub fn go_mut(&mut self, new_state: T, at: Instant) {
        self.raw.transition(new_state, at);
    }

    /// Returns whether the [`Animation`] is still in progress at the given
    /// time.
    pub fn is_animating(&self, at: Instant) -> bool {
        self.raw.in_progress(at)
    }

    /// Projects the [`Animation`] into an interpolated value between `start`
    /// and `end` at the given time.
    pub fn interpolate(&self, start: f32, end: f32, at: Instant) -> f32 {
        self.raw
            .animate(|state| start + (end - start) * state.float_value(), at)
    }

    /// Retrieves the current target state of the [`Animation`].
    pub fn value(&self) -> T {
        self.raw.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_settles_on_target() {
        let now = Instant::now();
        let animation = Animation::new(false).quick().go(true, now);

        assert!(animation.is_animating(now + Duration::from_millis(100)));
        assert_eq!(
            animation.interpolate(0.0, 1.0, now + Duration::from_millis(400)),
            1.0
        );
    }

    #[test]
    fn test_idle_animation_stays_at_start() {
        let now = Instant::now();
        let animation = Animation::new(false).quick();

        assert!(!animation.is_animating(now));
        assert_eq!(animation.interpolate(0.0, 1.0, now), 0.0);
    }
}
