// ABOUTME: Step flow controller for the avatar-selection wizard
// Owns the current step, gates forward moves on readiness, and fires navigation on completion

use serde::Serialize;
use tracing::{debug, info};

use super::navigation::NavigationSink;
use super::readiness::{ReadinessProvider, SelectionReadiness};
use super::step::WizardStep;

/// Observable state of one wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowState {
    pub current_step: WizardStep,
    pub is_complete: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            current_step: WizardStep::Welcome,
            is_complete: false,
        }
    }
}

/// Sequences the user through the wizard steps.
///
/// Every operation either succeeds or is a silent no-op: an advance whose
/// readiness precondition is unmet leaves the state untouched, so the
/// presentation layer has to surface the reason itself (see
/// [`StepFlowController::blocked_reason`]).
pub struct StepFlowController<R, N> {
    state: FlowState,
    /// Set once the navigation sink has been called in this session
    navigated: bool,
    readiness: R,
    navigator: N,
}

impl<R: ReadinessProvider, N: NavigationSink> StepFlowController<R, N> {
    /// Start a fresh session on the welcome step
    pub fn new(readiness: R, navigator: N) -> Self {
        Self {
            state: FlowState::default(),
            navigated: false,
            readiness,
            navigator,
        }
    }

    /// Start a session and immediately reconcile it with existing selections.
    ///
    /// A user who already chose all three avatars lands on `Complete` without
    /// being navigated away.
    pub fn resume(readiness: R, navigator: N) -> Self {
        let mut controller = Self::new(readiness, navigator);
        controller.sync_with_selections();
        controller
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Current readiness flags, read fresh from the provider
    pub fn readiness_snapshot(&self) -> SelectionReadiness {
        SelectionReadiness::read(&self.readiness)
    }

    pub fn readiness(&self) -> &R {
        &self.readiness
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// True iff every category has a selection, whatever the current step
    pub fn all_ready(&self) -> bool {
        self.readiness_snapshot().all()
    }

    /// Jump straight to a step. No readiness check is made.
    pub fn go_to_step(&mut self, step: WizardStep) {
        debug!(from = %self.state.current_step, to = %step, "Jumping to wizard step");
        self.state.current_step = step;
    }

    /// Advance one step if the current step's precondition holds.
    ///
    /// Returns whether the step changed. Reaching `Complete` marks the flow
    /// complete and asks the navigator to move on, once per session.
    pub fn go_to_next_step(&mut self) -> bool {
        let current = self.state.current_step;
        let Some(next) = current.next() else {
            return false;
        };

        if !self.validate_current_step() {
            debug!(step = %current, "Advance blocked: selection missing");
            return false;
        }

        self.state.current_step = next;
        info!(from = %current, to = %next, progress = next.progress(), "Wizard advanced");

        if next == WizardStep::Complete {
            self.state.is_complete = true;
            if !self.navigated {
                self.navigated = true;
                info!("Avatar selection complete, navigating to next screen");
                self.navigator.navigate_to_next_screen();
            }
        }

        true
    }

    /// Move back one step. No-op on `Welcome` and `Complete`.
    pub fn go_to_previous_step(&mut self) -> bool {
        match self.state.current_step.previous() {
            Some(prev) => {
                debug!(from = %self.state.current_step, to = %prev, "Wizard went back");
                self.state.current_step = prev;
                true
            }
            None => false,
        }
    }

    /// Whether the precondition for leaving the current step is satisfied
    pub fn validate_current_step(&self) -> bool {
        match self.state.current_step {
            WizardStep::Welcome | WizardStep::Complete => true,
            WizardStep::Church => self.readiness.is_church_avatar_selected(),
            WizardStep::Community => self.readiness.is_community_avatar_selected(),
            WizardStep::Companion => self.readiness.is_companion_selected(),
            WizardStep::Confirmation => self.all_ready(),
        }
    }

    /// Progress percentage for the current step
    pub fn step_progress(&self) -> u8 {
        self.state.current_step.progress()
    }

    /// Reconcile the session with the selection store.
    ///
    /// With everything selected the flow is shown as complete (without
    /// navigating); otherwise the completion flag is cleared and the step kept.
    pub fn sync_with_selections(&mut self) {
        if self.all_ready() {
            self.state.current_step = WizardStep::Complete;
            self.state.is_complete = true;
        } else {
            self.state.is_complete = false;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.state.current_step.previous().is_some()
    }

    /// The step from which "next" finishes the wizard
    pub fn is_final_step(&self) -> bool {
        self.state.current_step == WizardStep::Confirmation
    }

    /// Why "next" would currently do nothing, if it would
    pub fn blocked_reason(&self) -> Option<&'static str> {
        if self.validate_current_step() {
            return None;
        }
        match self.state.current_step {
            WizardStep::Church => Some("Please select a Church Avatar to proceed."),
            WizardStep::Community => Some("Please select a Community Avatar to proceed."),
            WizardStep::Companion => Some("Please select a Companion to proceed."),
            WizardStep::Confirmation => {
                Some("Please ensure Church, Community and Companion are all selected.")
            }
            WizardStep::Welcome | WizardStep::Complete => None,
        }
    }
}
