//! In-memory entity store
//!
//! The single authoritative holder of all record collections. The workflow
//! engine is the only writer; reports and the UI layer are read-only
//! consumers. Lookup failures map to `HrError::NotFound` with the entity's
//! type name, mirroring the repository surface of a database layer without
//! the database.

use std::collections::HashMap;

use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::traits::Entity;
use hr_core::types::Id;
use hr_models::{
    AttendanceRecord, OnboardingRequest, PerformanceEvaluation, TrainingSession, TrainingTopic,
    User,
};

/// All entity collections, exclusively owned
#[derive(Debug, Default)]
pub struct Store {
    users: HashMap<Id, User>,
    onboarding_requests: HashMap<Id, OnboardingRequest>,
    evaluations: HashMap<Id, PerformanceEvaluation>,
    topics: HashMap<Id, TrainingTopic>,
    sessions: HashMap<Id, TrainingSession>,
    attendance: HashMap<Id, AttendanceRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn user(&self, id: &str) -> HrResult<&User> {
        self.users
            .get(id)
            .ok_or_else(|| HrError::not_found(User::TYPE_NAME, id))
    }

    pub fn user_mut(&mut self, id: &str) -> HrResult<&mut User> {
        self.users
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(User::TYPE_NAME, id))
    }

    pub fn has_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    // ------------------------------------------------------------------
    // Onboarding requests
    // ------------------------------------------------------------------

    pub fn onboarding_request(&self, id: &str) -> HrResult<&OnboardingRequest> {
        self.onboarding_requests
            .get(id)
            .ok_or_else(|| HrError::not_found(OnboardingRequest::TYPE_NAME, id))
    }

    pub fn onboarding_request_mut(&mut self, id: &str) -> HrResult<&mut OnboardingRequest> {
        self.onboarding_requests
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(OnboardingRequest::TYPE_NAME, id))
    }

    pub fn has_onboarding_request(&self, id: &str) -> bool {
        self.onboarding_requests.contains_key(id)
    }

    pub fn insert_onboarding_request(&mut self, request: OnboardingRequest) {
        self.onboarding_requests.insert(request.id.clone(), request);
    }

    pub fn remove_onboarding_request(&mut self, id: &str) -> HrResult<OnboardingRequest> {
        self.onboarding_requests
            .remove(id)
            .ok_or_else(|| HrError::not_found(OnboardingRequest::TYPE_NAME, id))
    }

    pub fn onboarding_requests(&self) -> impl Iterator<Item = &OnboardingRequest> {
        self.onboarding_requests.values()
    }

    // ------------------------------------------------------------------
    // Performance evaluations
    // ------------------------------------------------------------------

    pub fn evaluation(&self, id: &str) -> HrResult<&PerformanceEvaluation> {
        self.evaluations
            .get(id)
            .ok_or_else(|| HrError::not_found(PerformanceEvaluation::TYPE_NAME, id))
    }

    pub fn evaluation_mut(&mut self, id: &str) -> HrResult<&mut PerformanceEvaluation> {
        self.evaluations
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(PerformanceEvaluation::TYPE_NAME, id))
    }

    pub fn insert_evaluation(&mut self, evaluation: PerformanceEvaluation) {
        self.evaluations.insert(evaluation.id.clone(), evaluation);
    }

    pub fn evaluations(&self) -> impl Iterator<Item = &PerformanceEvaluation> {
        self.evaluations.values()
    }

    // ------------------------------------------------------------------
    // Training topics
    // ------------------------------------------------------------------

    pub fn topic(&self, id: &str) -> HrResult<&TrainingTopic> {
        self.topics
            .get(id)
            .ok_or_else(|| HrError::not_found(TrainingTopic::TYPE_NAME, id))
    }

    pub fn topic_mut(&mut self, id: &str) -> HrResult<&mut TrainingTopic> {
        self.topics
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(TrainingTopic::TYPE_NAME, id))
    }

    pub fn insert_topic(&mut self, topic: TrainingTopic) {
        self.topics.insert(topic.id.clone(), topic);
    }

    pub fn remove_topic(&mut self, id: &str) -> HrResult<TrainingTopic> {
        self.topics
            .remove(id)
            .ok_or_else(|| HrError::not_found(TrainingTopic::TYPE_NAME, id))
    }

    pub fn topics(&self) -> impl Iterator<Item = &TrainingTopic> {
        self.topics.values()
    }

    // ------------------------------------------------------------------
    // Training sessions
    // ------------------------------------------------------------------

    pub fn session(&self, id: &str) -> HrResult<&TrainingSession> {
        self.sessions
            .get(id)
            .ok_or_else(|| HrError::not_found(TrainingSession::TYPE_NAME, id))
    }

    pub fn session_mut(&mut self, id: &str) -> HrResult<&mut TrainingSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(TrainingSession::TYPE_NAME, id))
    }

    pub fn insert_session(&mut self, session: TrainingSession) {
        self.sessions.insert(session.id.clone(), session);
    }

    pub fn sessions(&self) -> impl Iterator<Item = &TrainingSession> {
        self.sessions.values()
    }

    // ------------------------------------------------------------------
    // Attendance
    // ------------------------------------------------------------------

    pub fn attendance_record(&self, id: &str) -> HrResult<&AttendanceRecord> {
        self.attendance
            .get(id)
            .ok_or_else(|| HrError::not_found(AttendanceRecord::TYPE_NAME, id))
    }

    pub fn attendance_record_mut(&mut self, id: &str) -> HrResult<&mut AttendanceRecord> {
        self.attendance
            .get_mut(id)
            .ok_or_else(|| HrError::not_found(AttendanceRecord::TYPE_NAME, id))
    }

    pub fn insert_attendance_record(&mut self, record: AttendanceRecord) {
        self.attendance.insert(record.id.clone(), record);
    }

    pub fn attendance_records(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.attendance.values()
    }
}
