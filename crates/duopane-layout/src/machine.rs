//! Interaction lifecycle machine.
//!
//! Semantic input events and the two-state Idle/Dragging machine that
//! coordinates pointer drags with keyboard and reset requests. The machine
//! owns no position: it emits effects describing what the adapter should
//! request from the position model, together with deterministic transition
//! records suitable for diagnostics and replay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{ContainerBounds, PointerPoint};

/// Pointer button identity for press/release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Direction of a keyboard step request along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// Why an active drag was abandoned without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    PointerCancel,
    FocusLost,
    Teardown,
    Programmatic,
}

/// One semantic split input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitInputEvent {
    pub sequence: u64,
    #[serde(flatten)]
    pub kind: SplitInputEventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SplitInputEventKind {
    PointerDown {
        button: PointerButton,
        position: PointerPoint,
    },
    PointerMove {
        position: PointerPoint,
        bounds: ContainerBounds,
    },
    PointerUp {
        button: PointerButton,
        position: PointerPoint,
    },
    DoubleActivate,
    KeyboardStep {
        direction: StepDirection,
        units: u16,
    },
    Cancel {
        reason: CancelReason,
    },
}

impl SplitInputEvent {
    #[must_use]
    pub const fn new(sequence: u64, kind: SplitInputEventKind) -> Self {
        Self { sequence, kind }
    }

    /// Reject events that cannot be applied deterministically.
    pub fn validate(&self) -> Result<(), SplitInputEventError> {
        match &self.kind {
            SplitInputEventKind::PointerDown { position, .. }
            | SplitInputEventKind::PointerUp { position, .. } => {
                if !position.is_finite() {
                    return Err(SplitInputEventError::NonFiniteCoordinate);
                }
            }
            SplitInputEventKind::PointerMove { position, bounds } => {
                if !position.is_finite() {
                    return Err(SplitInputEventError::NonFiniteCoordinate);
                }
                if !bounds.is_finite() {
                    return Err(SplitInputEventError::NonFiniteBounds);
                }
            }
            SplitInputEventKind::KeyboardStep { units, .. } => {
                if *units == 0 {
                    return Err(SplitInputEventError::ZeroStepUnits);
                }
            }
            SplitInputEventKind::DoubleActivate | SplitInputEventKind::Cancel { .. } => {}
        }
        Ok(())
    }
}

/// Rejected semantic input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitInputEventError {
    NonFiniteCoordinate,
    NonFiniteBounds,
    ZeroStepUnits,
}

impl fmt::Display for SplitInputEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate => write!(f, "pointer coordinates must be finite"),
            Self::NonFiniteBounds => write!(f, "container bounds must be finite"),
            Self::ZeroStepUnits => write!(f, "keyboard step units must be non-zero"),
        }
    }
}

impl std::error::Error for SplitInputEventError {}

/// Interaction lifecycle state.
///
/// ```text
/// Idle -> Dragging -> Idle
/// ```
///
/// Keyboard steps and double-activation resets are discrete inputs: they
/// apply only from Idle and never create a state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitDragState {
    #[default]
    Idle,
    Dragging {
        origin: PointerPoint,
        current: PointerPoint,
        started_sequence: u64,
    },
}

/// Explicit no-op diagnostics for lifecycle events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitNoopReason {
    ReleaseWithoutActiveDrag,
    MoveWithoutActiveDrag,
    CancelWithoutActiveDrag,
    DragAlreadyInProgress,
    ActiveStateExcludesDiscreteInput,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitDragEffect {
    DragStarted {
        origin: PointerPoint,
    },
    DragMoved {
        position: PointerPoint,
        bounds: ContainerBounds,
    },
    DragEnded {
        end: PointerPoint,
    },
    ResetRequested,
    StepRequested {
        direction: StepDirection,
        units: u16,
    },
    Canceled {
        reason: CancelReason,
    },
    Noop {
        reason: SplitNoopReason,
    },
}

/// One state-machine transition with deterministic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitTransition {
    pub transition_id: u64,
    pub sequence: u64,
    pub from: SplitDragState,
    pub to: SplitDragState,
    pub effect: SplitDragEffect,
}

/// Runtime lifecycle machine for split drag interactions.
///
/// The machine is pure lifecycle: gating on `resizable`, button identity,
/// and separator focus happens in the adapter before an event is built, so
/// every event the machine sees is one the interaction is allowed to
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitDragMachine {
    state: SplitDragState,
    transition_counter: u64,
}

impl SplitDragMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SplitDragState {
        self.state
    }

    /// Whether a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SplitDragState::Dragging { .. })
    }

    /// Unconditionally reset to Idle, returning a diagnostic transition if a
    /// drag was active.
    ///
    /// Safety valve for teardown paths where building a full semantic event
    /// is not possible. Already-Idle machines return `None`.
    pub fn force_cancel(&mut self) -> Option<SplitTransition> {
        let from = self.state;
        match from {
            SplitDragState::Idle => None,
            SplitDragState::Dragging { .. } => {
                self.state = SplitDragState::Idle;
                self.transition_counter = self.transition_counter.saturating_add(1);
                Some(SplitTransition {
                    transition_id: self.transition_counter,
                    sequence: 0,
                    from,
                    to: SplitDragState::Idle,
                    effect: SplitDragEffect::Canceled {
                        reason: CancelReason::Programmatic,
                    },
                })
            }
        }
    }

    /// Apply one semantic event and emit the transition record.
    pub fn apply(
        &mut self,
        event: &SplitInputEvent,
    ) -> Result<SplitTransition, SplitInputEventError> {
        event.validate()?;

        let from = self.state;
        let effect = match (self.state, &event.kind) {
            (SplitDragState::Idle, SplitInputEventKind::PointerDown { position, .. }) => {
                self.state = SplitDragState::Dragging {
                    origin: *position,
                    current: *position,
                    started_sequence: event.sequence,
                };
                SplitDragEffect::DragStarted { origin: *position }
            }
            (SplitDragState::Idle, SplitInputEventKind::DoubleActivate) => {
                SplitDragEffect::ResetRequested
            }
            (SplitDragState::Idle, SplitInputEventKind::KeyboardStep { direction, units }) => {
                SplitDragEffect::StepRequested {
                    direction: *direction,
                    units: *units,
                }
            }
            (SplitDragState::Idle, SplitInputEventKind::PointerMove { .. }) => {
                SplitDragEffect::Noop {
                    reason: SplitNoopReason::MoveWithoutActiveDrag,
                }
            }
            (SplitDragState::Idle, SplitInputEventKind::PointerUp { .. }) => {
                SplitDragEffect::Noop {
                    reason: SplitNoopReason::ReleaseWithoutActiveDrag,
                }
            }
            (SplitDragState::Idle, SplitInputEventKind::Cancel { .. }) => SplitDragEffect::Noop {
                reason: SplitNoopReason::CancelWithoutActiveDrag,
            },
            (SplitDragState::Dragging { .. }, SplitInputEventKind::PointerDown { .. }) => {
                SplitDragEffect::Noop {
                    reason: SplitNoopReason::DragAlreadyInProgress,
                }
            }
            (
                SplitDragState::Dragging {
                    origin,
                    started_sequence,
                    ..
                },
                SplitInputEventKind::PointerMove { position, bounds },
            ) => {
                self.state = SplitDragState::Dragging {
                    origin,
                    current: *position,
                    started_sequence,
                };
                SplitDragEffect::DragMoved {
                    position: *position,
                    bounds: *bounds,
                }
            }
            (SplitDragState::Dragging { .. }, SplitInputEventKind::PointerUp { position, .. }) => {
                self.state = SplitDragState::Idle;
                SplitDragEffect::DragEnded { end: *position }
            }
            (SplitDragState::Dragging { .. }, SplitInputEventKind::Cancel { reason }) => {
                self.state = SplitDragState::Idle;
                SplitDragEffect::Canceled { reason: *reason }
            }
            (
                SplitDragState::Dragging { .. },
                SplitInputEventKind::DoubleActivate | SplitInputEventKind::KeyboardStep { .. },
            ) => SplitDragEffect::Noop {
                reason: SplitNoopReason::ActiveStateExcludesDiscreteInput,
            },
        };

        self.transition_counter = self.transition_counter.saturating_add(1);
        Ok(SplitTransition {
            transition_id: self.transition_counter,
            sequence: event.sequence,
            from,
            to: self.state,
            effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> PointerPoint {
        PointerPoint::new(x, y)
    }

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(0.0, 0.0, 1000.0, 500.0)
    }

    fn down(sequence: u64, at: PointerPoint) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerDown {
                button: PointerButton::Primary,
                position: at,
            },
        )
    }

    #[test]
    fn press_move_release_walks_the_lifecycle() {
        let mut machine = SplitDragMachine::new();

        let started = machine.apply(&down(1, pos(500.0, 10.0))).expect("valid");
        assert!(matches!(started.effect, SplitDragEffect::DragStarted { .. }));
        assert!(machine.is_dragging());

        let moved = machine
            .apply(&SplitInputEvent::new(
                2,
                SplitInputEventKind::PointerMove {
                    position: pos(300.0, 10.0),
                    bounds: bounds(),
                },
            ))
            .expect("valid");
        assert!(matches!(moved.effect, SplitDragEffect::DragMoved { .. }));
        assert!(matches!(
            machine.state(),
            SplitDragState::Dragging { started_sequence: 1, .. }
        ));

        let ended = machine
            .apply(&SplitInputEvent::new(
                3,
                SplitInputEventKind::PointerUp {
                    button: PointerButton::Primary,
                    position: pos(300.0, 400.0),
                },
            ))
            .expect("valid");
        assert!(matches!(ended.effect, SplitDragEffect::DragEnded { .. }));
        assert_eq!(machine.state(), SplitDragState::Idle);
    }

    #[test]
    fn release_without_press_is_an_idempotent_noop() {
        let mut machine = SplitDragMachine::new();
        let transition = machine
            .apply(&SplitInputEvent::new(
                1,
                SplitInputEventKind::PointerUp {
                    button: PointerButton::Primary,
                    position: pos(0.0, 0.0),
                },
            ))
            .expect("valid");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Noop {
                reason: SplitNoopReason::ReleaseWithoutActiveDrag,
            }
        );
        assert_eq!(transition.from, transition.to);
    }

    #[test]
    fn second_press_during_drag_is_ignored() {
        let mut machine = SplitDragMachine::new();
        machine.apply(&down(1, pos(500.0, 10.0))).expect("valid");
        let transition = machine.apply(&down(2, pos(600.0, 10.0))).expect("valid");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Noop {
                reason: SplitNoopReason::DragAlreadyInProgress,
            }
        );
        assert!(matches!(
            machine.state(),
            SplitDragState::Dragging { started_sequence: 1, .. }
        ));
    }

    #[test]
    fn discrete_inputs_apply_only_from_idle() {
        let mut machine = SplitDragMachine::new();

        let reset = machine
            .apply(&SplitInputEvent::new(1, SplitInputEventKind::DoubleActivate))
            .expect("valid");
        assert_eq!(reset.effect, SplitDragEffect::ResetRequested);

        machine.apply(&down(2, pos(500.0, 10.0))).expect("valid");
        let blocked = machine
            .apply(&SplitInputEvent::new(
                3,
                SplitInputEventKind::KeyboardStep {
                    direction: StepDirection::Increase,
                    units: 1,
                },
            ))
            .expect("valid");
        assert_eq!(
            blocked.effect,
            SplitDragEffect::Noop {
                reason: SplitNoopReason::ActiveStateExcludesDiscreteInput,
            }
        );
        assert!(machine.is_dragging());
    }

    #[test]
    fn cancel_ends_the_drag_and_is_idempotent() {
        let mut machine = SplitDragMachine::new();
        machine.apply(&down(1, pos(500.0, 10.0))).expect("valid");

        let canceled = machine
            .apply(&SplitInputEvent::new(
                2,
                SplitInputEventKind::Cancel {
                    reason: CancelReason::Teardown,
                },
            ))
            .expect("valid");
        assert_eq!(
            canceled.effect,
            SplitDragEffect::Canceled {
                reason: CancelReason::Teardown,
            }
        );
        assert_eq!(machine.state(), SplitDragState::Idle);

        let again = machine
            .apply(&SplitInputEvent::new(
                3,
                SplitInputEventKind::Cancel {
                    reason: CancelReason::Teardown,
                },
            ))
            .expect("valid");
        assert_eq!(
            again.effect,
            SplitDragEffect::Noop {
                reason: SplitNoopReason::CancelWithoutActiveDrag,
            }
        );
    }

    #[test]
    fn force_cancel_is_a_noop_when_idle() {
        let mut machine = SplitDragMachine::new();
        assert!(machine.force_cancel().is_none());

        machine.apply(&down(1, pos(500.0, 10.0))).expect("valid");
        let transition = machine.force_cancel().expect("drag was active");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Canceled {
                reason: CancelReason::Programmatic,
            }
        );
        assert_eq!(machine.state(), SplitDragState::Idle);
    }

    #[test]
    fn non_finite_coordinates_are_rejected_before_application() {
        let mut machine = SplitDragMachine::new();
        let err = machine
            .apply(&down(1, pos(f64::NAN, 0.0)))
            .expect_err("NaN should be rejected");
        assert_eq!(err, SplitInputEventError::NonFiniteCoordinate);
        assert_eq!(machine.state(), SplitDragState::Idle);

        let err = machine
            .apply(&SplitInputEvent::new(
                2,
                SplitInputEventKind::KeyboardStep {
                    direction: StepDirection::Decrease,
                    units: 0,
                },
            ))
            .expect_err("zero units should be rejected");
        assert_eq!(err, SplitInputEventError::ZeroStepUnits);
    }

    #[test]
    fn transitions_round_trip_through_serde() {
        let mut machine = SplitDragMachine::new();
        let transition = machine.apply(&down(7, pos(250.0, 40.0))).expect("valid");

        let encoded = serde_json::to_string(&transition).expect("serializable");
        let decoded: SplitTransition = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(decoded, transition);

        let state = serde_json::to_string(&machine.state()).expect("serializable");
        let decoded: SplitDragState = serde_json::from_str(&state).expect("deserializable");
        assert_eq!(decoded, machine.state());
    }
}
