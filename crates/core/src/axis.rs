use crate::Vector;

/// The single spatial dimension a scrollbar operates on.
///
/// An [`Axis`] is fixed for the lifetime of a scrollbar instance: a vertical
/// scrollbar reads the Y pointer coordinate and reports vertical deltas, a
/// horizontal one reads X and reports horizontal deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The scrollbar travels along the Y axis.
    Vertical,

    /// The scrollbar travels along the X axis.
    Horizontal,
}

impl Axis {
    /// Places a scalar delta on the active axis of a [`Vector`].
    ///
    /// The inactive component is always `0`, since a scrollbar only ever
    /// moves content along its own axis.
    pub fn pack(self, value: f32) -> Vector {
        match self {
            Self::Vertical => Vector::new(0.0, value),
            Self::Horizontal => Vector::new(value, 0.0),
        }
    }

    /// Selects the coordinate of a `(x, y)` pair that lies on this [`Axis`].
    pub fn pick(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_keeps_inactive_axis_zero() {
        assert_eq!(Axis::Vertical.pack(40.0), Vector::new(0.0, 40.0));
        assert_eq!(Axis::Horizontal.pack(40.0), Vector::new(40.0, 0.0));
    }

    #[test]
    fn test_pick() {
        assert_eq!(Axis::Vertical.pick(1.0, 2.0), 2.0);
        assert_eq!(Axis::Horizontal.pick(1.0, 2.0), 1.0);
    }
}
