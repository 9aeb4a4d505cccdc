//! Training matrix view
//!
//! The cross of employees and approved topics, showing per cell whether the
//! employee has a session scheduled, has completed one (and with what
//! score), or has nothing planned. A read-only projection over sessions,
//! never stored.

use hr_core::types::Id;
use hr_models::SessionStatus;
use hr_store::Store;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatrixCellStatus {
    NotScheduled,
    Scheduled,
    Completed { score: Option<f64> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixCell {
    pub topic_id: Id,
    pub topic_title: String,
    pub status: MatrixCellStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixRow {
    pub employee_id: Id,
    pub employee_name: String,
    pub cells: Vec<MatrixCell>,
}

fn cell_status(store: &Store, employee_id: &str, topic_id: &str) -> MatrixCellStatus {
    let mut scheduled = false;
    for session in store.sessions().filter(|s| s.topic_id == topic_id) {
        let Some(attendee) = session.attendee(employee_id) else {
            continue;
        };
        match session.status {
            // A completed run wins over any other scheduled one.
            SessionStatus::Completed => {
                return MatrixCellStatus::Completed {
                    score: attendee.score,
                }
            }
            SessionStatus::Scheduled => scheduled = true,
        }
    }
    if scheduled {
        MatrixCellStatus::Scheduled
    } else {
        MatrixCellStatus::NotScheduled
    }
}

/// Build the matrix over all users and all approved topics, rows and columns
/// sorted by id
pub fn training_matrix(store: &Store) -> Vec<MatrixRow> {
    let topics = store.approved_topics();

    let mut employees: Vec<_> = store.users().collect();
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    employees
        .into_iter()
        .map(|user| MatrixRow {
            employee_id: user.id.clone(),
            employee_name: user.name.clone(),
            cells: topics
                .iter()
                .map(|topic| MatrixCell {
                    topic_id: topic.id.clone(),
                    topic_title: topic.title.clone(),
                    status: cell_status(store, &user.id, &topic.id),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hr_core::types::Role;
    use hr_models::user::ContactInfo;
    use hr_models::{Attendee, TopicStatus, TrainingSession, TrainingTopic, User};

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            name: format!("User {id}"),
            role: Role::Employee,
            department: "Operations".into(),
            designation: "Operator".into(),
            payroll: None,
            benefits: None,
            contact: ContactInfo::default(),
        }
    }

    fn topic(id: &str, status: TopicStatus) -> TrainingTopic {
        let mut topic = TrainingTopic::new(id, format!("Topic {id}"), "Operations");
        topic.status = status;
        topic
    }

    fn session(id: &str, topic_id: &str, status: SessionStatus, attendees: Vec<Attendee>) -> TrainingSession {
        TrainingSession {
            id: id.into(),
            topic_id: topic_id.into(),
            topic_title: format!("Topic {topic_id}"),
            department: "Operations".into(),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            trainer: "Internal".into(),
            attendees,
            status,
        }
    }

    #[test]
    fn test_matrix_covers_approved_topics_only() {
        let mut store = Store::new();
        store.insert_user(user("E001"));
        store.insert_topic(topic("t-1", TopicStatus::Approved));
        store.insert_topic(topic("t-2", TopicStatus::PendingApproval));

        let matrix = training_matrix(&store);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].cells.len(), 1);
        assert_eq!(matrix[0].cells[0].status, MatrixCellStatus::NotScheduled);
    }

    #[test]
    fn test_matrix_cell_progression() {
        let mut store = Store::new();
        store.insert_user(user("E001"));
        store.insert_user(user("E002"));
        store.insert_topic(topic("t-1", TopicStatus::Approved));
        store.insert_session(session(
            "s-1",
            "t-1",
            SessionStatus::Scheduled,
            vec![Attendee::new("E001")],
        ));
        store.insert_session(session(
            "s-2",
            "t-1",
            SessionStatus::Completed,
            vec![Attendee {
                employee_id: "E002".into(),
                score: Some(4.5),
            }],
        ));

        let matrix = training_matrix(&store);
        assert_eq!(matrix[0].employee_id, "E001");
        assert_eq!(matrix[0].cells[0].status, MatrixCellStatus::Scheduled);
        assert_eq!(
            matrix[1].cells[0].status,
            MatrixCellStatus::Completed { score: Some(4.5) }
        );
    }
}
