#![forbid(unsafe_code)]

//! Host adapter for the duopane split layout.
//!
//! [`SplitInteraction`] owns the mutable split state and bridges host
//! pointer/keyboard lifecycle signals into the deterministic machine in
//! `duopane-layout`. Each dispatch returns:
//!
//! - the machine transition that was applied, if the event reached it,
//! - the committed position when the clamped value changed,
//! - host commands to apply (global listener attach/detach, drag affordance
//!   engage/release), and
//! - a diagnostic outcome for signals that were gated off.
//!
//! The global listener pair (pointer-move, pointer-release) is scoped to the
//! drag: `Attach` is emitted by the same dispatch that enters Dragging and
//! `Detach` exactly once by every dispatch that leaves it, including
//! cancellation and [`SplitInteraction::teardown`].

mod keys;

pub use keys::ArrowKey;

use std::fmt;

use duopane_layout::{
    CancelReason, ContainerBounds, PointerButton, PointerPoint, ResizeCursor, SplitConfig,
    SplitConfigError, SplitDragEffect, SplitDragMachine, SplitDragState, SplitFrame,
    SplitInputEvent, SplitInputEventError, SplitInputEventKind, SplitLimits, SplitTransition,
    StepDirection, share_at,
};

/// Global listener lifecycle command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    /// Install the transient global pointer-move/pointer-release listeners.
    Attach,
    /// Remove them again.
    Detach,
}

/// Drag affordance command: resize cursor plus text-selection suppression,
/// the process-wide UI state the original component mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceCommand {
    Engage { cursor: ResizeCursor },
    Release,
}

/// Deterministic reason why an incoming signal was gated off before the
/// machine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    ResizeDisabled,
    ButtonNotAllowed,
    ButtonMismatch,
    SeparatorNotFocused,
    CrossAxisKey,
    NotDragging,
    InvalidEvent(SplitInputEventError),
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The signal reached the machine; the transition tells what happened.
    Forwarded,
    /// The signal was gated off; state is untouched.
    Ignored(IgnoredReason),
}

/// Result of one host signal dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitDispatch {
    pub transition: Option<SplitTransition>,
    /// New committed position, present only when the clamped value changed.
    pub committed: Option<f64>,
    pub listener_command: Option<ListenerCommand>,
    pub affordance_command: Option<AffordanceCommand>,
    pub outcome: DispatchOutcome,
}

impl SplitDispatch {
    fn ignored(reason: IgnoredReason) -> Self {
        Self {
            transition: None,
            committed: None,
            listener_command: None,
            affordance_command: None,
            outcome: DispatchOutcome::Ignored(reason),
        }
    }

    fn forwarded(transition: SplitTransition) -> Self {
        Self {
            transition: Some(transition),
            committed: None,
            listener_command: None,
            affordance_command: None,
            outcome: DispatchOutcome::Forwarded,
        }
    }
}

/// Position-change notification handler.
pub type ChangeHandler = Box<dyn FnMut(f64)>;

/// Owns one split layout's interaction state.
///
/// Construction validates the configuration and initializes the position
/// from the clamped default split; the configuration is immutable for the
/// lifetime of the instance. Hosts must call [`Self::teardown`] when the
/// component unmounts so an in-flight drag releases its listeners.
pub struct SplitInteraction {
    config: SplitConfig,
    limits: SplitLimits,
    machine: SplitDragMachine,
    position: f64,
    drag_button: Option<PointerButton>,
    next_sequence: u64,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for SplitInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitInteraction")
            .field("config", &self.config)
            .field("machine", &self.machine)
            .field("position", &self.position)
            .field("drag_button", &self.drag_button)
            .field("next_sequence", &self.next_sequence)
            .field("on_change", &self.on_change.as_ref().map(|_| "FnMut(f64)"))
            .finish()
    }
}

impl SplitInteraction {
    /// Validate `config` and initialize the split state.
    pub fn new(config: SplitConfig) -> Result<Self, SplitConfigError> {
        config.validate()?;
        let limits = config.limits();
        Ok(Self {
            config,
            limits,
            machine: SplitDragMachine::new(),
            position: config.initial_position(),
            drag_button: None,
            next_sequence: 1,
            on_change: None,
        })
    }

    /// Register the handler invoked with every committed position change.
    #[must_use]
    pub fn with_change_handler(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Committed primary-pane share, percent.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Whether a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.machine.is_dragging()
    }

    /// Current machine state.
    #[must_use]
    pub const fn machine_state(&self) -> SplitDragState {
        self.machine.state()
    }

    /// Frame for rendering the current position.
    #[must_use]
    pub fn frame(&self) -> SplitFrame {
        SplitFrame::compute(&self.config, self.position)
    }

    /// Press on the divider. Only the primary button starts a drag, and only
    /// while resizing is enabled.
    pub fn pointer_down(&mut self, button: PointerButton, position: PointerPoint) -> SplitDispatch {
        if !self.config.resizable {
            return SplitDispatch::ignored(IgnoredReason::ResizeDisabled);
        }
        if button != PointerButton::Primary {
            return SplitDispatch::ignored(IgnoredReason::ButtonNotAllowed);
        }

        let transition = match self.apply(SplitInputEventKind::PointerDown { button, position }) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if matches!(transition.effect, SplitDragEffect::DragStarted { .. }) {
            self.drag_button = Some(button);
            dispatch.listener_command = Some(ListenerCommand::Attach);
            dispatch.affordance_command = Some(AffordanceCommand::Engage {
                cursor: ResizeCursor::for_orientation(self.config.orientation),
            });
            #[cfg(feature = "tracing")]
            tracing::debug!(x = position.x, y = position.y, "split drag started");
        }
        dispatch
    }

    /// Move anywhere while the global listeners are attached. `bounds` is
    /// the container rect sampled by the host for this event.
    pub fn pointer_move(&mut self, position: PointerPoint, bounds: ContainerBounds) -> SplitDispatch {
        if !self.config.resizable {
            return SplitDispatch::ignored(IgnoredReason::ResizeDisabled);
        }
        if !self.machine.is_dragging() {
            return SplitDispatch::ignored(IgnoredReason::NotDragging);
        }

        let transition = match self.apply(SplitInputEventKind::PointerMove { position, bounds }) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if let SplitDragEffect::DragMoved { position, bounds } = transition.effect {
            dispatch.committed =
                self.commit(share_at(self.config.orientation, bounds, position));
        }
        dispatch
    }

    /// Release anywhere, even outside the divider or container. The release
    /// must lift the button that started the drag; a release without a
    /// matching press is an idempotent no-op.
    pub fn pointer_up(&mut self, button: PointerButton, position: PointerPoint) -> SplitDispatch {
        if !self.config.resizable {
            return SplitDispatch::ignored(IgnoredReason::ResizeDisabled);
        }
        if !self.machine.is_dragging() {
            return SplitDispatch::ignored(IgnoredReason::NotDragging);
        }
        if self.drag_button.is_some_and(|active| active != button) {
            return SplitDispatch::ignored(IgnoredReason::ButtonMismatch);
        }

        let transition = match self.apply(SplitInputEventKind::PointerUp { button, position }) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if matches!(transition.effect, SplitDragEffect::DragEnded { .. }) {
            self.release_drag(&mut dispatch);
            #[cfg(feature = "tracing")]
            tracing::debug!(position = self.position, "split drag ended");
        }
        dispatch
    }

    /// Abandon an active drag without committing a release position.
    pub fn cancel(&mut self, reason: CancelReason) -> SplitDispatch {
        if !self.machine.is_dragging() {
            return SplitDispatch::ignored(IgnoredReason::NotDragging);
        }

        let transition = match self.apply(SplitInputEventKind::Cancel { reason }) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if matches!(transition.effect, SplitDragEffect::Canceled { .. }) {
            self.release_drag(&mut dispatch);
            #[cfg(feature = "tracing")]
            tracing::debug!(?reason, "split drag canceled");
        }
        dispatch
    }

    /// Double-activation on the divider: reset to the clamped midpoint.
    pub fn double_activate(&mut self) -> SplitDispatch {
        if !self.config.resizable {
            return SplitDispatch::ignored(IgnoredReason::ResizeDisabled);
        }

        let transition = match self.apply(SplitInputEventKind::DoubleActivate) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if transition.effect == SplitDragEffect::ResetRequested {
            dispatch.committed = self.commit(self.limits.midpoint());
        }
        dispatch
    }

    /// Keyboard step while the divider has input focus. Keys are ignored
    /// when focus is elsewhere, and cross-axis arrows never step.
    pub fn key_down(&mut self, key: ArrowKey, separator_focused: bool) -> SplitDispatch {
        if !self.config.resizable {
            return SplitDispatch::ignored(IgnoredReason::ResizeDisabled);
        }
        if !separator_focused {
            return SplitDispatch::ignored(IgnoredReason::SeparatorNotFocused);
        }
        let Some(direction) = key.step_direction(self.config.orientation) else {
            return SplitDispatch::ignored(IgnoredReason::CrossAxisKey);
        };

        let transition = match self.apply(SplitInputEventKind::KeyboardStep {
            direction,
            units: 1,
        }) {
            Ok(transition) => transition,
            Err(error) => return SplitDispatch::ignored(IgnoredReason::InvalidEvent(error)),
        };
        let mut dispatch = SplitDispatch::forwarded(transition);
        if let SplitDragEffect::StepRequested { direction, units } = transition.effect {
            let delta = self.config.keyboard_step * f64::from(units);
            let requested = match direction {
                StepDirection::Decrease => self.position - delta,
                StepDirection::Increase => self.position + delta,
            };
            dispatch.committed = self.commit(requested);
        }
        dispatch
    }

    /// Force an Idle transition and release host resources. Hosts call this
    /// when the component unmounts; calling it without an active drag is a
    /// no-op.
    pub fn teardown(&mut self) -> SplitDispatch {
        self.cancel(CancelReason::Teardown)
    }

    fn apply(&mut self, kind: SplitInputEventKind) -> Result<SplitTransition, SplitInputEventError> {
        let event = SplitInputEvent::new(self.next_sequence(), kind);
        self.machine.apply(&event)
    }

    fn release_drag(&mut self, dispatch: &mut SplitDispatch) {
        self.drag_button = None;
        dispatch.listener_command = Some(ListenerCommand::Detach);
        dispatch.affordance_command = Some(AffordanceCommand::Release);
    }

    fn commit(&mut self, requested: f64) -> Option<f64> {
        let clamped = self.limits.clamp(requested);
        if clamped == self.position {
            return None;
        }
        self.position = clamped;
        #[cfg(feature = "tracing")]
        tracing::trace!(position = clamped, "split position committed");
        if let Some(handler) = self.on_change.as_mut() {
            handler(clamped);
        }
        Some(clamped)
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}
