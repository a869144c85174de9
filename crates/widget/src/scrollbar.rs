//! A scrollbar decoupled from any rendering framework.
use crate::core::{Axis, Thumb, Track, Vector};
use crate::drag::Drag;

/// A pointer event delivered by the host.
///
/// Coordinates are track-local: the host is responsible for projecting the
/// pointer position into the 1-D space of the track, measured from its start,
/// before forwarding the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The pointer was pressed on the track, outside the thumb.
    TrackPressed {
        /// The track-local pointer coordinate.
        at: f32,
    },

    /// The pointer was pressed on the thumb.
    ThumbPressed {
        /// The track-local pointer coordinate.
        at: f32,
    },

    /// The pointer moved.
    PointerMoved {
        /// The track-local pointer coordinate.
        at: f32,
    },

    /// The pointer was released.
    PointerReleased,
}

/// A scroll command for the host to apply to its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Scroll the content to an absolute offset along the scrollbar axis.
    ///
    /// The target is unclamped; saturate it into the valid scroll range the
    /// way the real scrollable region would.
    ScrollTo(f32),

    /// Scroll the content by a relative delta.
    ///
    /// The component on the inactive axis is always `0`.
    ScrollBy(Vector),
}

/// A draggable scrollbar thumb mirroring an externally-owned scrollable
/// region.
///
/// The host drives it from the outside:
/// - each render, push fresh geometry with [`set_track`](Self::set_track) and
///   pull [`thumb`](Self::thumb) and [`is_dragging`](Self::is_dragging) for
///   drawing;
/// - on interaction, feed [`Event`]s to [`update`](Self::update) and apply
///   the returned [`Command`] to the scrollable content.
///
/// All of it is synchronous and single-threaded; dropping the [`Scrollbar`]
/// discards any pending drag state.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrollbar {
    axis: Axis,
    track: Track,
    drag: Drag,
}

impl Scrollbar {
    /// Creates a new [`Scrollbar`] on the given [`Axis`] with the given
    /// initial [`Track`] geometry.
    pub fn new(axis: Axis, track: Track) -> Self {
        Self {
            axis,
            track,
            drag: Drag::new(),
        }
    }

    /// Returns the [`Axis`] of the [`Scrollbar`].
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the current [`Track`] geometry.
    pub fn track(&self) -> Track {
        self.track
    }

    /// Refreshes the [`Track`] geometry.
    ///
    /// Call this whenever the content, the viewport, or the scroll offset
    /// changes; a live drag is unaffected.
    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    /// Computes the current [`Thumb`] geometry for rendering.
    ///
    /// These are always the exact, unsmoothed values; see
    /// [`Smoothed`](crate::Smoothed) for a presentation-side decorator.
    pub fn thumb(&self) -> Thumb {
        self.track.thumb()
    }

    /// Returns whether the thumb is currently being dragged.
    ///
    /// Hosts typically use this to pick an "active" visual style.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Processes a pointer [`Event`], returning the [`Command`] the host
    /// should apply to its content, if any.
    pub fn update(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::TrackPressed { at } => {
                log::trace!("track pressed at {at}");

                self.drag.press_track(at, &self.track)
            }
            Event::ThumbPressed { at } => {
                log::trace!("thumb grabbed at {at}");

                self.drag.press_thumb(at);

                None
            }
            Event::PointerMoved { at } => self.drag.pointer_moved(at, self.axis, &self.track),
            Event::PointerReleased => {
                if self.drag.is_dragging() {
                    log::trace!("thumb released");
                }

                self.drag.release();

                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_mirrors_track() {
        let mut scrollbar = Scrollbar::new(Axis::Vertical, Track::new(1000.0, 200.0, 0.0, 20.0));
        assert_eq!(scrollbar.thumb().offset, 0.0);

        scrollbar.set_track(Track::new(1000.0, 200.0, 800.0, 20.0));
        assert_eq!(scrollbar.thumb().offset, 160.0);
    }

    #[test]
    fn test_dragging_flag_follows_gesture() {
        let mut scrollbar = Scrollbar::new(Axis::Vertical, Track::new(1000.0, 200.0, 0.0, 20.0));
        assert!(!scrollbar.is_dragging());

        assert_eq!(scrollbar.update(Event::ThumbPressed { at: 50.0 }), None);
        assert!(scrollbar.is_dragging());

        assert_eq!(scrollbar.update(Event::PointerReleased), None);
        assert!(!scrollbar.is_dragging());
    }

    #[test]
    fn test_track_press_jumps() {
        let mut scrollbar = Scrollbar::new(Axis::Vertical, Track::new(1000.0, 200.0, 0.0, 20.0));

        assert_eq!(
            scrollbar.update(Event::TrackPressed { at: 100.0 }),
            Some(Command::ScrollTo(400.0))
        );
    }
}
