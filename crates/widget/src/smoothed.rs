//! Smooth the thumb geometry for presentation.
use crate::core::animation::Animation;
use crate::core::time::Instant;
use crate::core::Thumb;

/// A presentation-side decorator that eases a [`Thumb`] towards its target
/// geometry instead of jumping.
///
/// The scrollbar core always exposes exact values; a renderer that wants the
/// thumb to glide feeds those values into a [`Smoothed`] and draws what
/// [`sample`](Self::sample) returns. Skipping the decorator yields the exact
/// geometry, so smoothing stays strictly a presentation concern.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct Smoothed {
    start: Thumb,
    target: Thumb,
    animation: Option<Animation<bool>>,
}

impl Smoothed {
    /// Creates a new [`Smoothed`] decorator settled on the given [`Thumb`].
    pub fn new(thumb: Thumb) -> Self {
        Self {
            start: thumb,
            target: thumb,
            animation: None,
        }
    }

    /// Retargets the decorator towards a new [`Thumb`], easing from wherever
    /// the presentation currently is.
    pub fn set_target(&mut self, thumb: Thumb, now: Instant) {
        if thumb == self.target {
            return;
        }

        self.start = self.sample(now);
        self.target = thumb;
        self.animation = Some(Animation::new(false).quick().go(true, now));
    }

    /// Returns the exact [`Thumb`] the decorator is easing towards.
    pub fn target(&self) -> Thumb {
        self.target
    }

    /// Samples the eased [`Thumb`] geometry at the given time.
    pub fn sample(&self, now: Instant) -> Thumb {
        let Some(animation) = &self.animation else {
            return self.target;
        };

        if !animation.is_animating(now) {
            return self.target;
        }

        let t = animation.interpolate(0.0, 1.0, now);
        // Ease-out cubic, decelerating into the target
        let eased = 1.0 - (1.0 - t).powi(3);

        Thumb {
            length: self.start.length + (self.target.length - self.start.length) * eased,
            offset: self.start.offset + (self.target.offset - self.start.offset) * eased,
        }
    }

    /// Returns whether the presentation is still easing at the given time.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| animation.is_animating(now))
    }
}
