//! # hr-models
//!
//! Domain models for HR Portal RS.
//!
//! This crate contains the entity structs held by the entity store, their
//! status enumerations, and the boundary coercion of the raw onboarding form
//! into a typed profile. Each model implements the core traits from
//! `hr-core` (Entity, Identifiable).

pub use hr_core::traits::{Entity, Identifiable};
pub use hr_core::types::{Actor, Id, Role};

// Core domain modules
pub mod attendance;
pub mod evaluation;
pub mod onboarding;
pub mod training;
pub mod user;

// Re-exports for convenience
pub use attendance::AttendanceRecord;
pub use evaluation::{
    EvaluationStatus, KpiDimension, KpiRatings, ManagerComments, PerformanceEvaluation, MAX_RATING,
};
pub use onboarding::{FormData, OnboardingProfile, OnboardingRequest, OnboardingStatus};
pub use training::{
    Attendee, SessionStatus, TopicStatus, TrainingSession, TrainingTopic, MAX_SCORE,
};
pub use user::{BenefitValue, BenefitsEligibility, ContactInfo, PayrollStructure, User};
