//! Split position clamping.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SPLIT;

/// Clamp bounds for the split position, derived from the two minimum pane
/// sizes.
///
/// The valid interval is `[min_primary, 100 - min_secondary]`. The bounds
/// may be degenerate (`min_primary + min_secondary > 100`); clamping then
/// resolves to `min_primary`, so no caller ever has to search for a valid
/// position or handle an inverted interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLimits {
    min_primary: f64,
    min_secondary: f64,
}

impl SplitLimits {
    #[must_use]
    pub const fn new(min_primary: f64, min_secondary: f64) -> Self {
        Self {
            min_primary,
            min_secondary,
        }
    }

    /// Lower clamp bound.
    #[must_use]
    pub const fn min_primary(self) -> f64 {
        self.min_primary
    }

    /// Upper clamp bound, `100 - min_secondary`.
    #[must_use]
    pub fn max_position(self) -> f64 {
        100.0 - self.min_secondary
    }

    /// Constrain a requested position to the valid interval.
    ///
    /// Total for every `f64` input: NaN resolves to the lower bound and a
    /// degenerate interval resolves to `min_primary`. Implemented as
    /// `max`/`min` rather than `f64::clamp`, which panics on an inverted
    /// interval.
    #[must_use]
    pub fn clamp(self, requested: f64) -> f64 {
        let upper = self.max_position();
        if upper < self.min_primary {
            return self.min_primary;
        }
        requested.max(self.min_primary).min(upper)
    }

    /// Reset target: the midpoint, clamped to the same interval as every
    /// other mutation.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.clamp(DEFAULT_SPLIT)
    }

    /// Whether `position` already satisfies the clamp bounds.
    #[must_use]
    pub fn contains(self, position: f64) -> bool {
        self.clamp(position) == position
    }
}

impl Default for SplitLimits {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_MIN_PANE,
            crate::config::DEFAULT_MIN_PANE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_values_inside_the_interval() {
        let limits = SplitLimits::new(20.0, 20.0);
        assert_eq!(limits.clamp(50.0), 50.0);
        assert_eq!(limits.clamp(20.0), 20.0);
        assert_eq!(limits.clamp(80.0), 80.0);
    }

    #[test]
    fn clamp_saturates_at_both_bounds() {
        let limits = SplitLimits::new(25.0, 30.0);
        assert_eq!(limits.clamp(10.0), 25.0);
        assert_eq!(limits.clamp(95.0), 70.0);
    }

    #[test]
    fn degenerate_interval_resolves_to_min_primary() {
        let limits = SplitLimits::new(60.0, 60.0);
        assert_eq!(limits.clamp(0.0), 60.0);
        assert_eq!(limits.clamp(50.0), 60.0);
        assert_eq!(limits.clamp(100.0), 60.0);
    }

    #[test]
    fn clamp_is_total_for_non_real_inputs() {
        let limits = SplitLimits::new(20.0, 20.0);
        assert_eq!(limits.clamp(f64::NAN), 20.0);
        assert_eq!(limits.clamp(f64::INFINITY), 80.0);
        assert_eq!(limits.clamp(f64::NEG_INFINITY), 20.0);
    }

    #[test]
    fn midpoint_clamps_like_every_other_path() {
        assert_eq!(SplitLimits::new(20.0, 20.0).midpoint(), 50.0);
        assert_eq!(SplitLimits::new(70.0, 20.0).midpoint(), 70.0);
        assert_eq!(SplitLimits::new(10.0, 60.0).midpoint(), 40.0);
    }

    #[test]
    fn contains_matches_clamp_fixed_points() {
        let limits = SplitLimits::new(20.0, 20.0);
        assert!(limits.contains(20.0));
        assert!(limits.contains(55.5));
        assert!(!limits.contains(19.9));
        assert!(!limits.contains(80.1));
    }
}
