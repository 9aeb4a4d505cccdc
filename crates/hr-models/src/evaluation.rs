//! Performance evaluation model
//!
//! A quarterly (or otherwise labelled) review scored across five fixed KPI
//! dimensions. Ratings are only writable during the manager-review stage,
//! employee comments only during the employee-comments stage, and a completed
//! evaluation is immutable.

use hr_core::traits::{Entity, Identifiable};
use hr_core::types::Id;
use serde::{Deserialize, Serialize};

/// Evaluation lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    PendingManagerReview,
    PendingEmployeeComments,
    PendingHrFinalization,
    Completed,
}

impl EvaluationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PendingManagerReview => "pending_manager_review",
            Self::PendingEmployeeComments => "pending_employee_comments",
            Self::PendingHrFinalization => "pending_hr_finalization",
            Self::Completed => "completed",
        }
    }

    /// KPI ratings are writable only during manager review
    pub fn ratings_writable(&self) -> bool {
        matches!(self, Self::PendingManagerReview)
    }

    /// Employee comments are writable only while awaiting them
    pub fn employee_comments_writable(&self) -> bool {
        matches!(self, Self::PendingEmployeeComments)
    }

    /// HR may close from either waiting state
    pub fn finalizable(&self) -> bool {
        matches!(self, Self::PendingEmployeeComments | Self::PendingHrFinalization)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// The closed set of KPI dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum KpiDimension {
    Quality,
    Productivity,
    TechnicalSkills,
    Safety,
    Teamwork,
}

impl KpiDimension {
    pub const ALL: [KpiDimension; 5] = [
        Self::Quality,
        Self::Productivity,
        Self::TechnicalSkills,
        Self::Safety,
        Self::Teamwork,
    ];
}

/// Maximum rating on every KPI dimension
pub const MAX_RATING: u8 = 5;

/// Ratings across the five fixed dimensions, each 0-5
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KpiRatings {
    pub quality: u8,
    pub productivity: u8,
    pub technical_skills: u8,
    pub safety: u8,
    pub teamwork: u8,
}

impl KpiRatings {
    pub fn get(&self, dimension: KpiDimension) -> u8 {
        match dimension {
            KpiDimension::Quality => self.quality,
            KpiDimension::Productivity => self.productivity,
            KpiDimension::TechnicalSkills => self.technical_skills,
            KpiDimension::Safety => self.safety,
            KpiDimension::Teamwork => self.teamwork,
        }
    }

    pub fn values(&self) -> [u8; 5] {
        [
            self.quality,
            self.productivity,
            self.technical_skills,
            self.safety,
            self.teamwork,
        ]
    }

    /// Mean over all five dimensions
    pub fn mean(&self) -> f64 {
        self.values().iter().map(|&v| v as f64).sum::<f64>() / 5.0
    }

    /// First dimension holding an out-of-range value, if any
    pub fn out_of_range(&self) -> Option<KpiDimension> {
        KpiDimension::ALL
            .into_iter()
            .find(|&d| self.get(d) > MAX_RATING)
    }
}

/// Manager's free-text review
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManagerComments {
    pub strengths: String,
    pub improvements: String,
}

/// Performance evaluation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEvaluation {
    pub id: Id,

    pub employee_id: Id,
    /// Denormalized for display
    pub employee_name: String,

    pub manager_id: Id,

    /// Evaluation period label, e.g. "Q4 2026"
    pub period: String,

    pub status: EvaluationStatus,

    pub ratings: KpiRatings,

    pub manager_comments: ManagerComments,

    pub employee_comments: String,

    pub goals: String,
}

impl Identifiable for PerformanceEvaluation {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for PerformanceEvaluation {
    const TYPE_NAME: &'static str = "PerformanceEvaluation";
}

impl PerformanceEvaluation {
    /// New evaluation: zeroed KPIs, empty comments, awaiting manager review
    pub fn new(
        id: impl Into<Id>,
        employee_id: impl Into<Id>,
        employee_name: impl Into<String>,
        manager_id: impl Into<Id>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            manager_id: manager_id.into(),
            period: period.into(),
            status: EvaluationStatus::PendingManagerReview,
            ratings: KpiRatings::default(),
            manager_comments: ManagerComments::default(),
            employee_comments: String::new(),
            goals: String::new(),
        }
    }
}
