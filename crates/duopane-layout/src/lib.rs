#![forbid(unsafe_code)]

//! Deterministic model for a resizable dual-pane split layout.
//!
//! The crate is host-agnostic: it knows nothing about DOM nodes, terminals,
//! or window systems. It provides:
//!
//! - [`SplitConfig`]: the caller-facing configuration surface.
//! - [`SplitLimits`]: total, deterministic position clamping.
//! - [`geometry`]: pointer coordinate to candidate-share mapping.
//! - [`SplitDragMachine`]: the Idle/Dragging interaction lifecycle.
//! - [`SplitFrame`]: pane regions and separator semantics for rendering.
//!
//! Everything here is pure and serializable; mutable interaction state and
//! host command emission live in the `duopane-interact` adapter crate.

pub mod config;
pub mod frame;
pub mod geometry;
pub mod machine;
pub mod position;

pub use config::{Orientation, SplitConfig, SplitConfigError};
pub use frame::{ResizeCursor, ResolvedFrame, SeparatorSemantics, SplitFrame};
pub use geometry::{ContainerBounds, PointerPoint, share_at};
pub use machine::{
    CancelReason, PointerButton, SplitDragEffect, SplitDragMachine, SplitDragState,
    SplitInputEvent, SplitInputEventError, SplitInputEventKind, SplitNoopReason, SplitTransition,
    StepDirection,
};
pub use position::SplitLimits;
