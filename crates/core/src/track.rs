//! Map scroll positions to thumb positions, and back.
use thiserror::Error;

/// The geometry of a scrollable region, projected onto a single axis.
///
/// A [`Track`] is owned by the host and refreshed on every render; all the
/// conversions on it are pure. Lengths are in the same unit the host measures
/// its layout in, typically logical pixels.
///
/// # Preconditions
/// The conversions expect well-formed geometry: positive lengths and an
/// `offset` within `[0, content - viewport]`. The [`Track`] does not clamp —
/// out-of-range input is a caller bug, surfaced by debug assertions (see
/// [`Track::validate`]). In release builds the arithmetic is carried out
/// as-is, which yields an out-of-range thumb rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// The total scrollable content extent along the axis.
    pub content: f32,

    /// The visible viewport extent along the axis.
    pub viewport: f32,

    /// The current scroll offset of the content, in `[0, content - viewport]`.
    pub offset: f32,

    /// The minimum thumb length, a floor for usability with very long content.
    pub min_thumb: f32,
}

/// The derived geometry of a scrollbar thumb.
///
/// Recomputed from a [`Track`] whenever its geometry changes; holds
/// `offset + length <= viewport` for well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thumb {
    /// The length of the thumb along the axis, never below
    /// [`Track::min_thumb`].
    pub length: f32,

    /// The distance from the start of the track to the start of the thumb.
    pub offset: f32,
}

impl Track {
    /// Creates a new [`Track`] with the given geometry.
    pub fn new(content: f32, viewport: f32, offset: f32, min_thumb: f32) -> Self {
        let track = Self {
            content,
            viewport,
            offset,
            min_thumb,
        };

        debug_assert!(
            track.validate().is_ok(),
            "malformed track geometry: {:?}",
            track.validate()
        );

        track
    }

    /// Returns the scrollable range of the [`Track`], i.e. the distance
    /// between the two extreme scroll offsets.
    ///
    /// A range of zero (or less) means the content fits entirely in the
    /// viewport and no scrolling is possible.
    pub fn scroll_range(&self) -> f32 {
        self.content - self.viewport
    }

    /// Returns whether the content overflows the viewport along this axis.
    pub fn is_scrollable(&self) -> bool {
        self.scroll_range() > 0.0
    }

    /// Returns the proportion in `[0, 1]` of the scrollable range the content
    /// is currently scrolled to.
    ///
    /// Undefined when [`Track::scroll_range`] is zero; [`Track::thumb`]
    /// special-cases that before calling. Out-of-range offsets are not
    /// clamped.
    pub fn fraction(&self) -> f32 {
        let range = self.scroll_range();

        debug_assert!(range != 0.0, "fraction of a track with no scroll range");

        1.0 - (range - self.offset) / range
    }

    /// Computes the [`Thumb`] geometry for the current scroll offset.
    ///
    /// The thumb length is proportional to the visible fraction of the
    /// content (`viewport² / content`), floored at [`Track::min_thumb`]; its
    /// offset is rounded to the nearest whole unit with [`f32::round`]
    /// (ties away from zero).
    ///
    /// When the content does not overflow the viewport, the thumb fills the
    /// whole track: `length = viewport`, `offset = 0`. No division happens in
    /// that case.
    pub fn thumb(&self) -> Thumb {
        if !self.is_scrollable() {
            return Thumb {
                length: self.viewport,
                offset: 0.0,
            };
        }

        let proportional = self.viewport * self.viewport / self.content;
        let length = proportional.max(self.min_thumb);
        let offset = ((self.viewport - length) * self.fraction()).round();

        Thumb { length, offset }
    }

    /// Returns the scale factor between a delta on the thumb and the
    /// corresponding delta of the content: moving the thumb by `d` track
    /// units moves the content by `d / multiplier`.
    ///
    /// Requires `content > 0`.
    pub fn multiplier(&self) -> f32 {
        debug_assert!(self.content > 0.0, "multiplier of an empty track");

        self.viewport / self.content
    }

    /// Interprets a raw pointer coordinate within the track as a target
    /// content offset, centering a thumb of the given length under the
    /// pointer.
    ///
    /// The coordinate must already be track-local, i.e. measured from the
    /// start of the track. The result is not clamped: the host is expected to
    /// saturate it into `[0, content - viewport]` before applying it, the
    /// same way a real scrollable region saturates at its ends.
    pub fn position_for_click(&self, at: f32, thumb_length: f32) -> f32 {
        (at - thumb_length / 2.0) / self.multiplier()
    }

    /// Checks the [`Track`] preconditions, returning the first violation.
    pub fn validate(&self) -> Result<(), InvalidTrack> {
        if self.content <= 0.0 || self.viewport <= 0.0 {
            return Err(InvalidTrack::NonPositiveLength {
                content: self.content,
                viewport: self.viewport,
            });
        }

        if self.offset < 0.0 || self.offset > self.scroll_range().max(0.0) {
            return Err(InvalidTrack::OffsetOutOfRange {
                offset: self.offset,
                range: self.scroll_range().max(0.0),
            });
        }

        Ok(())
    }
}

/// A precondition violation in some [`Track`] geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidTrack {
    /// The content or viewport length is not positive.
    #[error("track lengths must be positive (content: {content}, viewport: {viewport})")]
    NonPositiveLength {
        /// The offending content length.
        content: f32,
        /// The offending viewport length.
        viewport: f32,
    },

    /// The scroll offset lies outside the scrollable range.
    #[error("scroll offset {offset} lies outside [0, {range}]")]
    OffsetOutOfRange {
        /// The offending scroll offset.
        offset: f32,
        /// The extent of the valid range.
        range: f32,
    },
}
