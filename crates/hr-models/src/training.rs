//! Training topic and session models
//!
//! Managers suggest topics; HR approves or rejects them. Sessions are
//! scheduled against approved topics with a chosen attendee roster, and
//! attendee scores become settable once the session is completed.

use chrono::NaiveDate;
use hr_core::traits::{Entity, Identifiable};
use hr_core::types::Id;
use serde::{Deserialize, Serialize};

/// Training topic status. Rejection removes the topic, so no terminal
/// rejected variant exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    PendingApproval,
    Approved,
}

impl TopicStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
        }
    }

    /// Only approved topics are schedulable
    pub fn is_schedulable(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Training topic entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingTopic {
    pub id: Id,
    pub title: String,
    /// Owning department
    pub department: String,
    pub status: TopicStatus,
}

impl Identifiable for TrainingTopic {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for TrainingTopic {
    const TYPE_NAME: &'static str = "TrainingTopic";
}

impl TrainingTopic {
    pub fn new(id: impl Into<Id>, title: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            department: department.into(),
            status: TopicStatus::PendingApproval,
        }
    }
}

/// Training session status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    Completed,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
        }
    }

    /// Attendee scores are settable only once the session has run
    pub fn scores_writable(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Maximum attendee score
pub const MAX_SCORE: f64 = 5.0;

/// A session attendee and their score. `None` until graded (or cleared).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendee {
    pub employee_id: Id,
    pub score: Option<f64>,
}

impl Attendee {
    pub fn new(employee_id: impl Into<Id>) -> Self {
        Self {
            employee_id: employee_id.into(),
            score: None,
        }
    }
}

/// Training session entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: Id,

    pub topic_id: Id,
    /// Denormalized for display
    pub topic_title: String,

    pub department: String,

    pub date: NaiveDate,

    /// Trainer label (free text; internal or external)
    pub trainer: String,

    pub attendees: Vec<Attendee>,

    pub status: SessionStatus,
}

impl Identifiable for TrainingSession {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for TrainingSession {
    const TYPE_NAME: &'static str = "TrainingSession";
}

impl TrainingSession {
    pub fn attendee(&self, employee_id: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.employee_id == employee_id)
    }

    pub fn attendee_mut(&mut self, employee_id: &str) -> Option<&mut Attendee> {
        self.attendees
            .iter_mut()
            .find(|a| a.employee_id == employee_id)
    }

    pub fn includes(&self, employee_id: &str) -> bool {
        self.attendee(employee_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_starts_pending() {
        let topic = TrainingTopic::new("t-1", "Scaffold Safety", "Construction");
        assert_eq!(topic.status, TopicStatus::PendingApproval);
        assert!(!topic.status.is_schedulable());
        assert!(TopicStatus::Approved.is_schedulable());
    }

    #[test]
    fn test_session_attendee_lookup() {
        let session = TrainingSession {
            id: "s-1".into(),
            topic_id: "t-1".into(),
            topic_title: "Scaffold Safety".into(),
            department: "Construction".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            trainer: "External - SafetyCo".into(),
            attendees: vec![Attendee::new("E001"), Attendee::new("E002")],
            status: SessionStatus::Scheduled,
        };

        assert!(session.includes("E001"));
        assert!(!session.includes("E003"));
        assert_eq!(session.attendee("E002").unwrap().score, None);
    }

    #[test]
    fn test_score_write_window() {
        assert!(!SessionStatus::Scheduled.scores_writable());
        assert!(SessionStatus::Completed.scores_writable());
    }
}
