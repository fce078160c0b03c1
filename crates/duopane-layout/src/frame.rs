//! Pane region and separator computation.
//!
//! Turns a committed position into the three adjacent regions along the
//! main axis (primary pane, divider, secondary pane; cross axis is 100% for
//! both panes) plus the divider's interactive-separator semantics.

use serde::{Deserialize, Serialize};

use crate::config::{Orientation, SplitConfig};

/// Cursor affordance shown over the divider while resizing is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCursor {
    ColResize,
    RowResize,
}

impl ResizeCursor {
    /// Cursor for the given main-axis orientation.
    #[must_use]
    pub const fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::ColResize,
            Orientation::Vertical => Self::RowResize,
        }
    }
}

/// Accessibility and affordance attributes for the divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparatorSemantics {
    /// Current primary share, exposed as the separator's numeric readout.
    pub value_now: f64,
    /// Visual orientation of the divider line, perpendicular to the main
    /// axis: a left/right split draws a vertical divider.
    pub orientation: Orientation,
    /// Keyboard-focusable exactly when resizing is enabled.
    pub focusable: bool,
    /// Resize cursor to advertise, absent when resizing is disabled.
    pub resize_cursor: Option<ResizeCursor>,
}

/// Computed regions along the main axis for one committed position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitFrame {
    pub orientation: Orientation,
    /// Primary pane share of the main axis, percent.
    pub primary_percent: f64,
    /// Divider thickness, pixels.
    pub divider_px: f64,
    /// Secondary pane share of the main axis, percent.
    pub secondary_percent: f64,
    pub separator: SeparatorSemantics,
}

impl SplitFrame {
    /// Compute the frame for a committed position.
    #[must_use]
    pub fn compute(config: &SplitConfig, position: f64) -> Self {
        let divider_line = match config.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
        Self {
            orientation: config.orientation,
            primary_percent: position,
            divider_px: config.splitter_px,
            secondary_percent: 100.0 - position,
            separator: SeparatorSemantics {
                value_now: position,
                orientation: divider_line,
                focusable: config.resizable,
                resize_cursor: config
                    .resizable
                    .then(|| ResizeCursor::for_orientation(config.orientation)),
            },
        }
    }

    /// Resolve the percentage regions against a concrete main-axis extent.
    ///
    /// The divider keeps its fixed thickness (capped at the extent) and the
    /// panes share the remaining space by the committed percentages.
    #[must_use]
    pub fn resolve(&self, main_extent_px: f64) -> ResolvedFrame {
        let extent = main_extent_px.max(0.0);
        let divider_px = self.divider_px.min(extent);
        let available = extent - divider_px;
        let primary_px = available * self.primary_percent / 100.0;
        ResolvedFrame {
            primary_px,
            divider_px,
            secondary_px: available - primary_px,
        }
    }
}

/// Pixel sizes of the three regions along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFrame {
    pub primary_px: f64,
    pub divider_px: f64,
    pub secondary_px: f64,
}
