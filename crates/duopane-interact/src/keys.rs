//! Arrow-key to step-direction mapping.

use duopane_layout::{Orientation, StepDirection};

/// Arrow keys recognized by the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    /// Step direction on the orientation's main axis, or `None` for a
    /// cross-axis key: left/right adjust a horizontal split, up/down a
    /// vertical one.
    #[must_use]
    pub const fn step_direction(self, orientation: Orientation) -> Option<StepDirection> {
        match (orientation, self) {
            (Orientation::Horizontal, Self::Left) | (Orientation::Vertical, Self::Up) => {
                Some(StepDirection::Decrease)
            }
            (Orientation::Horizontal, Self::Right) | (Orientation::Vertical, Self::Down) => {
                Some(StepDirection::Increase)
            }
            _ => None,
        }
    }
}
