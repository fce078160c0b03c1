//! Pointer-to-share geometry.
//!
//! Maps a pointer coordinate plus container bounds to a candidate split
//! share. The result is intentionally unclamped: bounds enforcement lives in
//! [`SplitLimits`](crate::position::SplitLimits) so the two concerns stay
//! independently testable.

use serde::{Deserialize, Serialize};

use crate::config::Orientation;

/// Container bounds in host pixel coordinates.
///
/// Hosts sample these per move event (layout can change mid-drag).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Origin and extent on the orientation's main axis.
    #[must_use]
    pub const fn main_axis(self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.x, self.width),
            Orientation::Vertical => (self.y, self.height),
        }
    }

    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Pointer position in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate on the orientation's main axis.
    #[must_use]
    pub const fn main_coordinate(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Candidate share for the primary pane, percent, unclamped.
///
/// Computes `((coordinate - origin) / extent) * 100` on the main axis. A
/// container with zero or negative main-axis extent yields 50.0 rather than
/// a non-finite share.
#[must_use]
pub fn share_at(orientation: Orientation, bounds: ContainerBounds, point: PointerPoint) -> f64 {
    let (origin, extent) = bounds.main_axis(orientation);
    if extent <= 0.0 {
        return 50.0;
    }
    (point.main_coordinate(orientation) - origin) / extent * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(0.0, 0.0, 1000.0, 500.0)
    }

    #[test]
    fn horizontal_uses_x_and_width() {
        let share = share_at(
            Orientation::Horizontal,
            bounds(),
            PointerPoint::new(300.0, 499.0),
        );
        assert_eq!(share, 30.0);
    }

    #[test]
    fn vertical_uses_y_and_height() {
        let share = share_at(
            Orientation::Vertical,
            bounds(),
            PointerPoint::new(999.0, 125.0),
        );
        assert_eq!(share, 25.0);
    }

    #[test]
    fn cross_axis_movement_has_no_effect() {
        let a = share_at(
            Orientation::Vertical,
            bounds(),
            PointerPoint::new(0.0, 200.0),
        );
        let b = share_at(
            Orientation::Vertical,
            bounds(),
            PointerPoint::new(950.0, 200.0),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn offset_container_origin_is_subtracted() {
        let bounds = ContainerBounds::new(100.0, 50.0, 400.0, 200.0);
        let share = share_at(
            Orientation::Horizontal,
            bounds,
            PointerPoint::new(300.0, 0.0),
        );
        assert_eq!(share, 50.0);
    }

    #[test]
    fn share_is_unclamped() {
        let below = share_at(
            Orientation::Horizontal,
            bounds(),
            PointerPoint::new(-100.0, 0.0),
        );
        let above = share_at(
            Orientation::Horizontal,
            bounds(),
            PointerPoint::new(1200.0, 0.0),
        );
        assert_eq!(below, -10.0);
        assert_eq!(above, 120.0);
    }

    #[test]
    fn empty_extent_degrades_to_midpoint() {
        let collapsed = ContainerBounds::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(
            share_at(Orientation::Horizontal, collapsed, PointerPoint::new(10.0, 10.0)),
            50.0
        );
        assert_eq!(
            share_at(Orientation::Vertical, collapsed, PointerPoint::new(10.0, 10.0)),
            50.0
        );
    }
}
