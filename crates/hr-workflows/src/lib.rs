//! # hr-workflows
//!
//! Lifecycle workflow engine for HR Portal RS.
//!
//! One service per stateful entity kind executes its transitions: each call
//! resolves the target record, consults the authorization gate, checks the
//! explicit transition table, validates inputs, and only then mutates the
//! store. A failing call leaves the store exactly as it found it.

pub mod attendance;
pub mod evaluations;
pub mod onboarding;
pub mod training;
pub mod transitions;
pub mod users;

pub use attendance::AttendanceWorkflow;
pub use evaluations::EvaluationWorkflow;
pub use onboarding::OnboardingWorkflow;
pub use training::TrainingWorkflow;
pub use users::UserWorkflow;
