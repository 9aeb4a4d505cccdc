//! Legal-transition tables
//!
//! Each stateful entity kind carries an explicit adjacency table of
//! `(from, to, action)` edges. A pair absent from its table is rejected with
//! `InvalidTransition` before any role check on the edge's action runs.
//! Terminal outcomes that remove a record (onboarding approval/rejection,
//! topic rejection) have no target state and are guarded by the services
//! directly against the current status.

use hr_auth::Action;
use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_models::{EvaluationStatus, OnboardingStatus, SessionStatus, TopicStatus};

/// Display label for a status, used in `InvalidTransition` errors
pub trait StatusLabel: Copy + PartialEq {
    fn status_label(&self) -> &'static str;
}

impl StatusLabel for OnboardingStatus {
    fn status_label(&self) -> &'static str {
        self.label()
    }
}

impl StatusLabel for EvaluationStatus {
    fn status_label(&self) -> &'static str {
        self.label()
    }
}

impl StatusLabel for TopicStatus {
    fn status_label(&self) -> &'static str {
        self.label()
    }
}

impl StatusLabel for SessionStatus {
    fn status_label(&self) -> &'static str {
        self.label()
    }
}

/// Adjacency table for one entity kind
pub struct TransitionTable<S: StatusLabel + 'static> {
    pub entity: &'static str,
    pub edges: &'static [(S, S, Action)],
}

impl<S: StatusLabel> TransitionTable<S> {
    /// The action guarding the `from -> to` edge, if the edge is legal
    pub fn action(&self, from: S, to: S) -> Option<Action> {
        self.edges
            .iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, action)| *action)
    }

    /// Require the `from -> to` edge, or fail with `InvalidTransition`
    pub fn guard(&self, id: &str, from: S, to: S, operation: &'static str) -> HrResult<Action> {
        self.action(from, to).ok_or_else(|| HrError::InvalidTransition {
            entity: self.entity,
            id: id.to_string(),
            status: from.status_label().to_string(),
            operation,
        })
    }
}

pub static ONBOARDING: TransitionTable<OnboardingStatus> = TransitionTable {
    entity: "OnboardingRequest",
    edges: &[(
        OnboardingStatus::PendingManagerApproval,
        OnboardingStatus::PendingHrApproval,
        Action::OnboardingApproveAsManager,
    )],
};

pub static EVALUATION: TransitionTable<EvaluationStatus> = TransitionTable {
    entity: "PerformanceEvaluation",
    edges: &[
        (
            EvaluationStatus::PendingManagerReview,
            EvaluationStatus::PendingEmployeeComments,
            Action::EvaluationSubmitManagerReview,
        ),
        (
            EvaluationStatus::PendingEmployeeComments,
            EvaluationStatus::PendingHrFinalization,
            Action::EvaluationSubmitEmployeeComments,
        ),
        // HR may close from either waiting state.
        (
            EvaluationStatus::PendingEmployeeComments,
            EvaluationStatus::Completed,
            Action::EvaluationFinalize,
        ),
        (
            EvaluationStatus::PendingHrFinalization,
            EvaluationStatus::Completed,
            Action::EvaluationFinalize,
        ),
    ],
};

pub static TOPIC: TransitionTable<TopicStatus> = TransitionTable {
    entity: "TrainingTopic",
    edges: &[(
        TopicStatus::PendingApproval,
        TopicStatus::Approved,
        Action::TopicApprove,
    )],
};

pub static SESSION: TransitionTable<SessionStatus> = TransitionTable {
    entity: "TrainingSession",
    edges: &[(
        SessionStatus::Scheduled,
        SessionStatus::Completed,
        Action::SessionMarkCompleted,
    )],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_edges() {
        assert_eq!(
            EVALUATION.action(
                EvaluationStatus::PendingManagerReview,
                EvaluationStatus::PendingEmployeeComments
            ),
            Some(Action::EvaluationSubmitManagerReview)
        );
        assert_eq!(
            EVALUATION.action(
                EvaluationStatus::PendingHrFinalization,
                EvaluationStatus::Completed
            ),
            Some(Action::EvaluationFinalize)
        );
        // No edge leaves the completed state.
        assert_eq!(
            EVALUATION.action(
                EvaluationStatus::Completed,
                EvaluationStatus::PendingManagerReview
            ),
            None
        );
    }

    #[test]
    fn test_guard_rejects_missing_edge() {
        let err = EVALUATION
            .guard(
                "ev-1",
                EvaluationStatus::Completed,
                EvaluationStatus::PendingEmployeeComments,
                "submit_manager_review",
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "invalid_transition");
        assert!(err.to_string().contains("completed"));
    }

    #[test]
    fn test_onboarding_single_forward_edge() {
        assert!(ONBOARDING
            .action(
                OnboardingStatus::PendingManagerApproval,
                OnboardingStatus::PendingHrApproval
            )
            .is_some());
        assert!(ONBOARDING
            .action(
                OnboardingStatus::PendingHrApproval,
                OnboardingStatus::PendingManagerApproval
            )
            .is_none());
    }
}
