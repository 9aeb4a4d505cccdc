//! Role-based authorization gate
//!
//! A pure, table-driven mapping from `(role, action, is_owner_or_assignee)`
//! to allow/deny. The gate is consulted before any store mutation; a denial
//! must prevent the mutation entirely.

use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::types::Role;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Actions
// ============================================================================

/// Every gated transition in the engine, one variant per transition name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    OnboardingApproveAsManager,
    OnboardingApproveAsHr,
    OnboardingReject,
    EvaluationInitiate,
    EvaluationSubmitManagerReview,
    EvaluationSubmitEmployeeComments,
    EvaluationFinalize,
    TopicSuggest,
    TopicApprove,
    TopicReject,
    SessionSchedule,
    SessionMarkCompleted,
    SessionSetScore,
    AttendanceClockIn,
    AttendanceClockOut,
    AttendanceCorrect,
    PayrollUpdate,
    ContactUpdate,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnboardingApproveAsManager => "onboarding_approve_as_manager",
            Self::OnboardingApproveAsHr => "onboarding_approve_as_hr",
            Self::OnboardingReject => "onboarding_reject",
            Self::EvaluationInitiate => "evaluation_initiate",
            Self::EvaluationSubmitManagerReview => "evaluation_submit_manager_review",
            Self::EvaluationSubmitEmployeeComments => "evaluation_submit_employee_comments",
            Self::EvaluationFinalize => "evaluation_finalize",
            Self::TopicSuggest => "topic_suggest",
            Self::TopicApprove => "topic_approve",
            Self::TopicReject => "topic_reject",
            Self::SessionSchedule => "session_schedule",
            Self::SessionMarkCompleted => "session_mark_completed",
            Self::SessionSetScore => "session_set_score",
            Self::AttendanceClockIn => "attendance_clock_in",
            Self::AttendanceClockOut => "attendance_clock_out",
            Self::AttendanceCorrect => "attendance_correct",
            Self::PayrollUpdate => "payroll_update",
            Self::ContactUpdate => "contact_update",
        }
    }
}

// ============================================================================
// Rule table
// ============================================================================

/// One gate rule: which roles may perform the action, and whether the caller
/// must additionally be the owner/assignee of the target record
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub action: Action,
    pub roles: &'static [Role],
    pub requires_ownership: bool,
}

static RULES: &[Rule] = &[
    Rule {
        action: Action::OnboardingApproveAsManager,
        roles: &[Role::Manager],
        requires_ownership: true,
    },
    Rule {
        action: Action::OnboardingApproveAsHr,
        roles: &[Role::HrPayroll],
        requires_ownership: false,
    },
    // Rejection is legal for both review stages; stage-appropriate ownership
    // is decided by the caller and passed in as is_owner.
    Rule {
        action: Action::OnboardingReject,
        roles: &[Role::Manager, Role::HrPayroll],
        requires_ownership: true,
    },
    Rule {
        action: Action::EvaluationInitiate,
        roles: &[Role::Manager],
        requires_ownership: false,
    },
    Rule {
        action: Action::EvaluationSubmitManagerReview,
        roles: &[Role::Manager],
        requires_ownership: true,
    },
    Rule {
        action: Action::EvaluationSubmitEmployeeComments,
        roles: &[Role::Employee],
        requires_ownership: true,
    },
    Rule {
        action: Action::EvaluationFinalize,
        roles: &[Role::HrPayroll],
        requires_ownership: false,
    },
    Rule {
        action: Action::TopicSuggest,
        roles: &[Role::Manager],
        requires_ownership: false,
    },
    Rule {
        action: Action::TopicApprove,
        roles: &[Role::HrPayroll],
        requires_ownership: false,
    },
    Rule {
        action: Action::TopicReject,
        roles: &[Role::HrPayroll],
        requires_ownership: false,
    },
    Rule {
        action: Action::SessionSchedule,
        roles: &[Role::Manager],
        requires_ownership: false,
    },
    Rule {
        action: Action::SessionMarkCompleted,
        roles: &[Role::Manager, Role::HrPayroll],
        requires_ownership: false,
    },
    Rule {
        action: Action::SessionSetScore,
        roles: &[Role::Manager, Role::HrPayroll],
        requires_ownership: false,
    },
    // Clock actions are self-service: any role, own record only.
    Rule {
        action: Action::AttendanceClockIn,
        roles: &[Role::Employee, Role::Manager, Role::HrPayroll, Role::Management],
        requires_ownership: true,
    },
    Rule {
        action: Action::AttendanceClockOut,
        roles: &[Role::Employee, Role::Manager, Role::HrPayroll, Role::Management],
        requires_ownership: true,
    },
    Rule {
        action: Action::AttendanceCorrect,
        roles: &[Role::HrPayroll, Role::Management],
        requires_ownership: false,
    },
    Rule {
        action: Action::PayrollUpdate,
        roles: &[Role::HrPayroll],
        requires_ownership: false,
    },
    Rule {
        action: Action::ContactUpdate,
        roles: &[Role::Employee, Role::Manager, Role::HrPayroll, Role::Management],
        requires_ownership: true,
    },
];

static RULE_INDEX: Lazy<HashMap<Action, &'static Rule>> =
    Lazy::new(|| RULES.iter().map(|rule| (rule.action, rule)).collect());

// ============================================================================
// Gate
// ============================================================================

/// Check whether `role` may perform `action`. `is_owner` reports whether the
/// caller owns or is assigned to the target record; it is only consulted for
/// rules that require ownership.
pub fn allowed(role: Role, action: Action, is_owner: bool) -> bool {
    match RULE_INDEX.get(&action) {
        Some(rule) => rule.roles.contains(&role) && (!rule.requires_ownership || is_owner),
        // No rule for an action means nobody may perform it.
        None => false,
    }
}

/// Gate entry point used by the workflow engine: deny becomes `Forbidden`
pub fn authorize(role: Role, action: Action, is_owner: bool) -> HrResult<()> {
    if allowed(role, action, is_owner) {
        Ok(())
    } else {
        Err(HrError::forbidden(format!(
            "{} may not {}",
            role.label(),
            action.name()
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_approval_requires_assignment() {
        assert!(allowed(Role::Manager, Action::OnboardingApproveAsManager, true));
        assert!(!allowed(Role::Manager, Action::OnboardingApproveAsManager, false));
        assert!(!allowed(Role::HrPayroll, Action::OnboardingApproveAsManager, true));
    }

    #[test]
    fn test_hr_approval_is_role_only() {
        assert!(allowed(Role::HrPayroll, Action::OnboardingApproveAsHr, false));
        assert!(!allowed(Role::Manager, Action::OnboardingApproveAsHr, true));
        assert!(!allowed(Role::Management, Action::OnboardingApproveAsHr, false));
    }

    #[test]
    fn test_employee_comments_owner_only() {
        assert!(allowed(Role::Employee, Action::EvaluationSubmitEmployeeComments, true));
        assert!(!allowed(Role::Employee, Action::EvaluationSubmitEmployeeComments, false));
        assert!(!allowed(Role::Manager, Action::EvaluationSubmitEmployeeComments, true));
    }

    #[test]
    fn test_finalize_hr_only() {
        assert!(allowed(Role::HrPayroll, Action::EvaluationFinalize, false));
        assert!(!allowed(Role::Manager, Action::EvaluationFinalize, false));
        assert!(!allowed(Role::Employee, Action::EvaluationFinalize, true));
    }

    #[test]
    fn test_topic_lifecycle_roles() {
        assert!(allowed(Role::Manager, Action::TopicSuggest, false));
        assert!(!allowed(Role::Employee, Action::TopicSuggest, false));
        assert!(allowed(Role::HrPayroll, Action::TopicApprove, false));
        assert!(!allowed(Role::Manager, Action::TopicApprove, false));
    }

    #[test]
    fn test_contact_update_owner_any_role() {
        assert!(allowed(Role::Employee, Action::ContactUpdate, true));
        assert!(allowed(Role::Management, Action::ContactUpdate, true));
        assert!(!allowed(Role::Employee, Action::ContactUpdate, false));
    }

    #[test]
    fn test_clock_actions_any_role_own_record() {
        for role in [Role::Employee, Role::Manager, Role::HrPayroll, Role::Management] {
            assert!(allowed(role, Action::AttendanceClockIn, true));
            assert!(allowed(role, Action::AttendanceClockOut, true));
            assert!(!allowed(role, Action::AttendanceClockIn, false));
            assert!(!allowed(role, Action::AttendanceClockOut, false));
        }
    }

    #[test]
    fn test_authorize_denial_message() {
        let err = authorize(Role::Employee, Action::TopicApprove, false).unwrap_err();
        assert_eq!(err.error_code(), "forbidden");
        assert!(err.to_string().contains("topic_approve"));
    }

    #[test]
    fn test_every_rule_indexed_once() {
        assert_eq!(RULE_INDEX.len(), RULES.len());
    }
}
