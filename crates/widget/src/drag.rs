//! Turn raw pointer events into scroll commands.
//!
//! A thumb drag only ever reports *relative* deltas: re-deriving an absolute
//! target from possibly-stale geometry mid-drag would fight the host's own
//! position updates. A track click has no reference point on the thumb, so it
//! reports an *absolute* target instead.
use crate::core::{Axis, Track};
use crate::scrollbar::Command;

/// The drag-gesture state machine of a scrollbar.
///
/// A [`Drag`] starts idle and lives for the lifetime of its scrollbar; it is
/// reset by the gesture transitions themselves. Stray pointer moves and
/// releases while idle are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drag {
    interaction: Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Interaction {
    #[default]
    Idle,
    Dragging {
        last: f32,
    },
}

impl Drag {
    /// Creates a new idle [`Drag`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a drag gesture is currently live.
    pub fn is_dragging(self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    /// Handles a pointer press on the track, outside the thumb.
    ///
    /// Starts a drag at `at` and emits an absolute [`Command::ScrollTo`] that
    /// centers the thumb under the pointer, letting the user jump-scroll by
    /// clicking anywhere on the track. On a track with no scroll range there
    /// is no valid target and nothing is emitted.
    pub fn press_track(&mut self, at: f32, track: &Track) -> Option<Command> {
        self.interaction = Interaction::Dragging { last: at };

        if !track.is_scrollable() {
            return None;
        }

        let thumb = track.thumb();

        Some(Command::ScrollTo(
            track.position_for_click(at, thumb.length),
        ))
    }

    /// Handles a pointer press on the thumb itself.
    ///
    /// Starts a drag at `at` without emitting anything; the thumb must not
    /// jump when grabbed.
    pub fn press_thumb(&mut self, at: f32) {
        self.interaction = Interaction::Dragging { last: at };
    }

    /// Handles a pointer move.
    ///
    /// While dragging, emits a relative [`Command::ScrollBy`] carrying the
    /// content-space delta on the active axis (the other component is always
    /// `0`). A no-op while idle, and emission-free on a track with no scroll
    /// range.
    pub fn pointer_moved(&mut self, at: f32, axis: Axis, track: &Track) -> Option<Command> {
        let Interaction::Dragging { last } = self.interaction else {
            return None;
        };

        self.interaction = Interaction::Dragging { last: at };

        if !track.is_scrollable() {
            return None;
        }

        let delta = last - at;

        Some(Command::ScrollBy(axis.pack(delta / track.multiplier())))
    }

    /// Handles a pointer release, ending any live drag.
    pub fn release(&mut self) {
        self.interaction = Interaction::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector;

    fn track() -> Track {
        // multiplier = 0.5
        Track::new(400.0, 200.0, 0.0, 20.0)
    }

    #[test]
    fn test_thumb_drag_emits_relative_delta() {
        let mut drag = Drag::new();

        drag.press_thumb(100.0);
        assert!(drag.is_dragging());

        let command = drag.pointer_moved(80.0, Axis::Vertical, &track());
        assert_eq!(
            command,
            Some(Command::ScrollBy(Vector::new(0.0, (100.0 - 80.0) / 0.5)))
        );
    }

    #[test]
    fn test_moves_after_release_are_ignored() {
        let mut drag = Drag::new();

        drag.press_thumb(100.0);
        let _ = drag.pointer_moved(80.0, Axis::Vertical, &track());
        drag.release();

        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer_moved(50.0, Axis::Vertical, &track()), None);
    }

    #[test]
    fn test_stray_release_is_a_noop() {
        let mut drag = Drag::new();
        drag.release();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_track_press_emits_absolute_target() {
        // content = 1000, viewport = 200 => thumb = 40, multiplier = 0.2
        let track = Track::new(1000.0, 200.0, 0.0, 20.0);
        let mut drag = Drag::new();

        let command = drag.press_track(100.0, &track);
        assert_eq!(command, Some(Command::ScrollTo(400.0)));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_degenerate_track_emits_nothing() {
        let track = Track::new(200.0, 200.0, 0.0, 20.0);
        let mut drag = Drag::new();

        assert_eq!(drag.press_track(100.0, &track), None);
        assert_eq!(drag.pointer_moved(80.0, Axis::Vertical, &track), None);
    }

    #[test]
    fn test_horizontal_delta_lands_on_x() {
        let mut drag = Drag::new();

        drag.press_thumb(10.0);
        let command = drag.pointer_moved(30.0, Axis::Horizontal, &track());

        assert_eq!(command, Some(Command::ScrollBy(Vector::new(-40.0, 0.0))));
    }
}
