// ABOUTME: Behavioural tests for the wizard step flow driven through the public controller API
// Readiness is toggled between calls to mimic selection screens changing the store

use std::cell::Cell;

use avatar_wizard::flow::{
    FlowState, NavigationSink, ReadinessProvider, RecordingNavigator, StepFlowController,
    WizardStep,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Toggles {
    church: Cell<bool>,
    community: Cell<bool>,
    companion: Cell<bool>,
}

impl Toggles {
    fn all() -> Self {
        let toggles = Self::default();
        toggles.set_all(true);
        toggles
    }

    fn set_all(&self, value: bool) {
        self.church.set(value);
        self.community.set(value);
        self.companion.set(value);
    }
}

impl ReadinessProvider for Toggles {
    fn is_church_avatar_selected(&self) -> bool {
        self.church.get()
    }

    fn is_community_avatar_selected(&self) -> bool {
        self.community.get()
    }

    fn is_companion_selected(&self) -> bool {
        self.companion.get()
    }
}

type Controller = StepFlowController<Toggles, RecordingNavigator>;

fn fresh() -> Controller {
    StepFlowController::new(Toggles::default(), RecordingNavigator::new())
}

fn at(step: WizardStep, toggles: Toggles) -> Controller {
    let mut controller = StepFlowController::new(toggles, RecordingNavigator::new());
    controller.go_to_step(step);
    controller
}

#[test]
fn test_fresh_controller_starts_on_welcome() {
    let controller = fresh();
    assert_eq!(controller.state(), FlowState::default());
    assert_eq!(controller.current_step(), WizardStep::Welcome);
    assert!(!controller.is_complete());
    assert_eq!(controller.step_progress(), 0);
}

#[test]
fn test_progress_table() {
    let expected = [
        (WizardStep::Welcome, 0),
        (WizardStep::Church, 25),
        (WizardStep::Community, 50),
        (WizardStep::Companion, 75),
        (WizardStep::Confirmation, 100),
        (WizardStep::Complete, 100),
    ];
    for (step, progress) in expected {
        let controller = at(step, Toggles::default());
        assert_eq!(controller.step_progress(), progress, "progress for {step}");
    }
}

#[test]
fn test_welcome_always_advances() {
    let mut controller = fresh();
    assert!(controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Church);
}

#[test]
fn test_blocked_steps_are_silent_noops() {
    for step in [
        WizardStep::Church,
        WizardStep::Community,
        WizardStep::Companion,
        WizardStep::Confirmation,
    ] {
        let mut controller = at(step, Toggles::default());
        let before = controller.state();
        assert!(!controller.validate_current_step());
        assert!(!controller.go_to_next_step());
        assert_eq!(controller.state(), before, "state changed on blocked {step}");
        assert_eq!(controller.navigator().calls(), 0);
    }
}

#[test]
fn test_confirmation_needs_all_three() {
    let toggles = Toggles::default();
    toggles.church.set(true);
    toggles.community.set(true);
    let mut controller = at(WizardStep::Confirmation, toggles);

    assert!(!controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Confirmation);

    controller.readiness().companion.set(true);
    assert!(controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Complete);
}

#[test]
fn test_readiness_is_read_at_call_time() {
    let mut controller = at(WizardStep::Church, Toggles::default());
    assert!(!controller.go_to_next_step());

    controller.readiness().church.set(true);
    assert!(controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Community);
}

#[test]
fn test_full_walkthrough_navigates_exactly_once() {
    let mut controller = fresh();
    assert!(controller.go_to_next_step());

    controller.readiness().church.set(true);
    assert!(controller.go_to_next_step());
    controller.readiness().community.set(true);
    assert!(controller.go_to_next_step());
    controller.readiness().companion.set(true);
    assert!(controller.go_to_next_step());

    assert_eq!(controller.current_step(), WizardStep::Confirmation);
    assert!(controller.is_final_step());
    assert_eq!(controller.navigator().calls(), 0);

    assert!(controller.go_to_next_step());
    assert_eq!(
        controller.state(),
        FlowState {
            current_step: WizardStep::Complete,
            is_complete: true,
        }
    );
    assert_eq!(controller.navigator().calls(), 1);

    // Nothing after Complete
    assert!(!controller.go_to_next_step());
    assert_eq!(controller.navigator().calls(), 1);
}

#[test]
fn test_review_and_finish_again_does_not_navigate_twice() {
    let mut controller = at(WizardStep::Confirmation, Toggles::all());
    assert!(controller.go_to_next_step());
    assert_eq!(controller.navigator().calls(), 1);

    controller.go_to_step(WizardStep::Confirmation);
    assert!(controller.go_to_next_step());
    assert_eq!(controller.current_step(), WizardStep::Complete);
    assert_eq!(controller.navigator().calls(), 1);
}

#[test]
fn test_back_is_noop_on_welcome_and_complete() {
    let mut controller = fresh();
    assert!(!controller.can_go_back());
    assert!(!controller.go_to_previous_step());
    assert_eq!(controller.current_step(), WizardStep::Welcome);

    let mut controller = at(WizardStep::Complete, Toggles::default());
    assert!(!controller.can_go_back());
    assert!(!controller.go_to_previous_step());
    assert_eq!(controller.current_step(), WizardStep::Complete);
}

#[test]
fn test_back_walks_to_welcome_without_readiness() {
    let mut controller = at(WizardStep::Confirmation, Toggles::default());
    let mut visited = vec![controller.current_step()];
    while controller.go_to_previous_step() {
        visited.push(controller.current_step());
    }
    assert_eq!(
        visited,
        vec![
            WizardStep::Confirmation,
            WizardStep::Companion,
            WizardStep::Community,
            WizardStep::Church,
            WizardStep::Welcome,
        ]
    );
}

#[test]
fn test_go_to_step_ignores_readiness_and_completion() {
    let mut controller = fresh();
    controller.go_to_step(WizardStep::Complete);
    assert_eq!(controller.current_step(), WizardStep::Complete);
    assert!(!controller.is_complete());
    assert_eq!(controller.navigator().calls(), 0);
}

#[test]
fn test_sync_jumps_to_complete_when_all_selected() {
    let mut controller = at(WizardStep::Community, Toggles::all());
    controller.sync_with_selections();
    assert_eq!(
        controller.state(),
        FlowState {
            current_step: WizardStep::Complete,
            is_complete: true,
        }
    );
    assert_eq!(controller.navigator().calls(), 0);
}

#[test]
fn test_sync_clears_completion_when_selection_removed() {
    let mut controller = at(WizardStep::Confirmation, Toggles::all());
    assert!(controller.go_to_next_step());
    assert!(controller.is_complete());

    controller.readiness().companion.set(false);
    controller.sync_with_selections();
    assert!(!controller.is_complete());
    assert_eq!(controller.current_step(), WizardStep::Complete);
}

#[test]
fn test_resume_with_partial_selections_starts_on_welcome() {
    let toggles = Toggles::default();
    toggles.church.set(true);
    let controller = StepFlowController::resume(toggles, RecordingNavigator::new());
    assert_eq!(controller.state(), FlowState::default());
}

#[test]
fn test_resume_then_review_navigates_once() {
    let mut controller = StepFlowController::resume(Toggles::all(), RecordingNavigator::new());
    assert_eq!(controller.current_step(), WizardStep::Complete);
    assert_eq!(controller.navigator().calls(), 0);

    controller.go_to_step(WizardStep::Confirmation);
    assert!(controller.go_to_next_step());
    assert_eq!(controller.navigator().calls(), 1);
}

#[test]
fn test_blocked_reason_matches_step() {
    let controller = at(WizardStep::Community, Toggles::default());
    assert_eq!(
        controller.blocked_reason(),
        Some("Please select a Community Avatar to proceed.")
    );

    let controller = at(WizardStep::Community, Toggles::all());
    assert_eq!(controller.blocked_reason(), None);

    let controller = fresh();
    assert_eq!(controller.blocked_reason(), None);
}

#[test]
fn test_all_ready_is_independent_of_step() {
    let toggles = Toggles::all();
    let controller = StepFlowController::new(toggles, RecordingNavigator::new());
    assert_eq!(controller.current_step(), WizardStep::Welcome);
    assert!(controller.all_ready());

    controller.readiness().set_all(false);
    assert!(!controller.all_ready());
}

struct PanicsOnSecondCall(bool);

impl NavigationSink for PanicsOnSecondCall {
    fn navigate_to_next_screen(&mut self) {
        assert!(!self.0, "navigated twice");
        self.0 = true;
    }
}

#[test]
fn test_custom_sink_sees_single_call_across_repeated_finishes() {
    let mut controller = StepFlowController::new(Toggles::all(), PanicsOnSecondCall(false));
    for _ in 0..3 {
        controller.go_to_step(WizardStep::Confirmation);
        assert!(controller.go_to_next_step());
    }
    assert!(controller.navigator().0);
}
