//! Score aggregation
//!
//! Averages over completed evaluations and completed training sessions. An
//! empty pool yields `None`, never zero, so callers can distinguish absence
//! of data from a true zero score.

use hr_core::types::Id;
use hr_models::{EvaluationStatus, SessionStatus};
use hr_store::Store;
use serde::{Deserialize, Serialize};

/// Aggregation scope: one employee, one department, or everyone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ScoreScope {
    Employee { id: Id },
    Department { name: String },
    Organization,
}

impl ScoreScope {
    pub fn employee(id: impl Into<Id>) -> Self {
        Self::Employee { id: id.into() }
    }

    pub fn department(name: impl Into<String>) -> Self {
        Self::Department { name: name.into() }
    }
}

fn mean(pool: &[f64]) -> Option<f64> {
    if pool.is_empty() {
        None
    } else {
        Some(pool.iter().sum::<f64>() / pool.len() as f64)
    }
}

/// Mean over every KPI rating of every completed evaluation in scope, all
/// five dimensions flattened into one pool.
///
/// Department scope resolves each evaluation's employee against the user
/// collection; evaluations of employees no longer resolvable are out of
/// scope.
pub fn evaluation_score_average(store: &Store, scope: &ScoreScope) -> Option<f64> {
    let pool: Vec<f64> = store
        .evaluations()
        .filter(|e| e.status == EvaluationStatus::Completed)
        .filter(|e| match scope {
            ScoreScope::Employee { id } => e.employee_id == *id,
            ScoreScope::Department { name } => store
                .user(&e.employee_id)
                .map(|u| u.department == *name)
                .unwrap_or(false),
            ScoreScope::Organization => true,
        })
        .flat_map(|e| e.ratings.values().into_iter().map(f64::from))
        .collect();

    mean(&pool)
}

/// Mean over the non-null attendee scores of completed sessions in scope.
/// Zero scores count; only null (ungraded or cleared) scores are excluded.
///
/// Department scope uses the session's department; employee scope pools that
/// attendee's scores across all completed sessions.
pub fn training_score_average(store: &Store, scope: &ScoreScope) -> Option<f64> {
    let pool: Vec<f64> = store
        .sessions()
        .filter(|s| s.status == SessionStatus::Completed)
        .filter(|s| match scope {
            ScoreScope::Department { name } => s.department == *name,
            _ => true,
        })
        .flat_map(|s| s.attendees.iter())
        .filter(|a| match scope {
            ScoreScope::Employee { id } => a.employee_id == *id,
            _ => true,
        })
        .filter_map(|a| a.score)
        .collect();

    mean(&pool)
}
