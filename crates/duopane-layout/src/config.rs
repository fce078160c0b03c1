//! Split configuration surface and validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::SplitLimits;

/// Main-axis orientation of the split.
///
/// `Horizontal` places the panes left/right (x is the main axis);
/// `Vertical` places them top/bottom (y is the main axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Default initial split request, percent of the main axis.
pub const DEFAULT_SPLIT: f64 = 50.0;

/// Default minimum pane size, percent.
pub const DEFAULT_MIN_PANE: f64 = 20.0;

/// Default divider thickness, pixels.
pub const DEFAULT_SPLITTER_PX: f64 = 4.0;

/// Default keyboard step, percentage points per press.
pub const DEFAULT_KEYBOARD_STEP: f64 = 1.0;

/// Caller-supplied split configuration, immutable per interaction instance.
///
/// `default_split` is a request, not a guarantee: construction clamps it
/// through [`SplitLimits`] exactly like every runtime update, so the initial
/// position always satisfies the bounds invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub orientation: Orientation,
    /// `false` disables every interaction path (drag, keyboard, reset).
    pub resizable: bool,
    pub default_split: f64,
    /// Percent of the main axis the primary pane may never shrink below.
    pub min_primary: f64,
    /// Percent of the main axis the secondary pane may never shrink below.
    pub min_secondary: f64,
    /// Divider thickness, pixels.
    pub splitter_px: f64,
    /// Percentage points per keyboard step unit.
    pub keyboard_step: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            resizable: true,
            default_split: DEFAULT_SPLIT,
            min_primary: DEFAULT_MIN_PANE,
            min_secondary: DEFAULT_MIN_PANE,
            splitter_px: DEFAULT_SPLITTER_PX,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
        }
    }
}

impl SplitConfig {
    /// Validate the numeric fields.
    ///
    /// Out-of-range `default_split` is not an error (it is clamped), and a
    /// degenerate minimum pair summing above 100 is accepted: clamping then
    /// resolves deterministically to `min_primary`.
    pub fn validate(&self) -> Result<(), SplitConfigError> {
        for (field, value) in [
            ("default_split", self.default_split),
            ("min_primary", self.min_primary),
            ("min_secondary", self.min_secondary),
            ("splitter_px", self.splitter_px),
            ("keyboard_step", self.keyboard_step),
        ] {
            if !value.is_finite() {
                return Err(SplitConfigError::NonFinite { field, value });
            }
        }
        for (field, value) in [
            ("min_primary", self.min_primary),
            ("min_secondary", self.min_secondary),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(SplitConfigError::MinOutOfRange { field, value });
            }
        }
        if self.splitter_px <= 0.0 {
            return Err(SplitConfigError::SplitterNotPositive {
                value: self.splitter_px,
            });
        }
        if self.keyboard_step <= 0.0 {
            return Err(SplitConfigError::StepNotPositive {
                value: self.keyboard_step,
            });
        }
        Ok(())
    }

    /// Clamp bounds derived from the minimum pane sizes.
    #[must_use]
    pub const fn limits(&self) -> SplitLimits {
        SplitLimits::new(self.min_primary, self.min_secondary)
    }

    /// Initial position: `default_split` through the runtime clamp.
    #[must_use]
    pub fn initial_position(&self) -> f64 {
        self.limits().clamp(self.default_split)
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitConfigError {
    NonFinite { field: &'static str, value: f64 },
    MinOutOfRange { field: &'static str, value: f64 },
    SplitterNotPositive { value: f64 },
    StepNotPositive { value: f64 },
}

impl fmt::Display for SplitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "split config field {field} must be finite, got {value}")
            }
            Self::MinOutOfRange { field, value } => {
                write!(f, "split config field {field} must lie in [0, 100], got {value}")
            }
            Self::SplitterNotPositive { value } => {
                write!(f, "splitter thickness must be positive, got {value}")
            }
            Self::StepNotPositive { value } => {
                write!(f, "keyboard step must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for SplitConfigError {}
