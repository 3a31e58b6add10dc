// ABOUTME: Avatar-selection wizard flow
// Linear step sequence gated on church, community and companion selections

pub mod controller;
pub mod navigation;
pub mod readiness;
pub mod step;

pub use controller::{FlowState, StepFlowController};
pub use navigation::{NavigationSink, RecordingNavigator};
pub use readiness::{ReadinessProvider, SelectionReadiness};
pub use step::WizardStep;
