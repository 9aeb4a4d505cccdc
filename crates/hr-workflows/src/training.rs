//! Training workflow
//!
//! Topics move through manager suggestion and HR approval; sessions are
//! scheduled against approved topics, explicitly marked completed, and only
//! then graded per attendee.

use chrono::NaiveDate;
use hr_auth::{authorize, Action};
use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::types::{Actor, Id};
use hr_models::{
    Attendee, SessionStatus, TopicStatus, TrainingSession, TrainingTopic, MAX_SCORE,
};
use hr_store::Store;
use uuid::Uuid;

use crate::transitions::{SESSION, TOPIC};

/// Workflow service for training topics and sessions
pub struct TrainingWorkflow<'a> {
    store: &'a mut Store,
}

impl<'a> TrainingWorkflow<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Topics
    // ------------------------------------------------------------------

    /// Manager suggests a topic for their department
    pub fn suggest_topic(
        &mut self,
        actor: &Actor,
        title: impl Into<String>,
        department: impl Into<String>,
    ) -> HrResult<TrainingTopic> {
        authorize(actor.role, Action::TopicSuggest, false)?;

        let title = title.into();
        if title.trim().is_empty() {
            return Err(HrError::invalid_field("title", "can't be blank"));
        }

        let topic = TrainingTopic::new(Uuid::new_v4().to_string(), title, department);
        self.store.insert_topic(topic.clone());
        Ok(topic)
    }

    /// HR approves a suggested topic, making it schedulable
    pub fn approve_topic(&mut self, actor: &Actor, topic_id: &str) -> HrResult<()> {
        let topic = self.store.topic(topic_id)?;
        authorize(actor.role, Action::TopicApprove, false)?;

        TOPIC.guard(topic_id, topic.status, TopicStatus::Approved, "approve_topic")?;

        self.store.topic_mut(topic_id)?.status = TopicStatus::Approved;
        Ok(())
    }

    /// HR rejects a suggested topic, removing it
    pub fn reject_topic(&mut self, actor: &Actor, topic_id: &str) -> HrResult<()> {
        let topic = self.store.topic(topic_id)?;
        authorize(actor.role, Action::TopicReject, false)?;

        if topic.status != TopicStatus::PendingApproval {
            return Err(HrError::InvalidTransition {
                entity: "TrainingTopic",
                id: topic_id.to_string(),
                status: topic.status.label().to_string(),
                operation: "reject_topic",
            });
        }

        self.store.remove_topic(topic_id)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Schedule a session against an approved topic with a chosen roster.
    /// Attendee scores start unset.
    pub fn schedule_session(
        &mut self,
        actor: &Actor,
        topic_id: &str,
        attendee_ids: &[Id],
        date: NaiveDate,
        trainer: impl Into<String>,
    ) -> HrResult<TrainingSession> {
        authorize(actor.role, Action::SessionSchedule, false)?;

        let topic = self.store.topic(topic_id)?;
        if !topic.status.is_schedulable() {
            return Err(HrError::InvalidTransition {
                entity: "TrainingTopic",
                id: topic_id.to_string(),
                status: topic.status.label().to_string(),
                operation: "schedule_session",
            });
        }

        if attendee_ids.is_empty() {
            return Err(HrError::invalid_field("attendees", "can't be empty"));
        }
        for (index, id) in attendee_ids.iter().enumerate() {
            if attendee_ids[..index].contains(id) {
                return Err(HrError::invalid_field(
                    "attendees",
                    format!("{id} appears more than once"),
                ));
            }
            if !self.store.has_user(id) {
                return Err(HrError::not_found("User", id.clone()));
            }
        }

        let session = TrainingSession {
            id: Uuid::new_v4().to_string(),
            topic_id: topic_id.to_string(),
            topic_title: topic.title.clone(),
            department: topic.department.clone(),
            date,
            trainer: trainer.into(),
            attendees: attendee_ids
                .iter()
                .map(|id| Attendee::new(id.clone()))
                .collect(),
            status: SessionStatus::Scheduled,
        };
        self.store.insert_session(session.clone());
        Ok(session)
    }

    /// Administrative transition marking a scheduled session as having run;
    /// nothing in the engine triggers this from the calendar
    pub fn mark_completed(&mut self, actor: &Actor, session_id: &str) -> HrResult<()> {
        let session = self.store.session(session_id)?;
        authorize(actor.role, Action::SessionMarkCompleted, false)?;

        SESSION.guard(
            session_id,
            session.status,
            SessionStatus::Completed,
            "mark_completed",
        )?;

        self.store.session_mut(session_id)?.status = SessionStatus::Completed;
        tracing::debug!(session_id = %session_id, "training session marked completed");
        Ok(())
    }

    /// Grade one attendee of a completed session. `None` clears the score.
    pub fn set_score(
        &mut self,
        actor: &Actor,
        session_id: &str,
        employee_id: &str,
        score: Option<f64>,
    ) -> HrResult<()> {
        let session = self.store.session(session_id)?;
        authorize(actor.role, Action::SessionSetScore, false)?;

        if !session.status.scores_writable() {
            return Err(HrError::InvalidTransition {
                entity: "TrainingSession",
                id: session_id.to_string(),
                status: session.status.label().to_string(),
                operation: "set_score",
            });
        }
        if session.attendee(employee_id).is_none() {
            return Err(HrError::not_found("SessionAttendee", employee_id));
        }
        if let Some(value) = score {
            if !(0.0..=MAX_SCORE).contains(&value) {
                return Err(HrError::invalid_field(
                    "score",
                    format!("must be between 0 and {MAX_SCORE}"),
                ));
            }
        }

        let session = self.store.session_mut(session_id)?;
        // Attendee presence was just checked under the same critical section.
        if let Some(attendee) = session.attendee_mut(employee_id) {
            attendee.score = score;
        }
        Ok(())
    }
}
