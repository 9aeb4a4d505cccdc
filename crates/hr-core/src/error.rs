//! Core error types for HR Portal RS
//!
//! Every command in the engine fails with exactly one of these kinds; no
//! failure is fatal to the process and none is retried internally.

use std::collections::HashMap;
use thiserror::Error;

/// Core error type for all engine operations
#[derive(Error, Debug)]
pub enum HrError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid transition: {entity} {id} is {status}, cannot {operation}")]
    InvalidTransition {
        entity: &'static str,
        id: String,
        status: String,
        operation: &'static str,
    },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl HrError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Single-field validation failure shorthand
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::Validation(errors)
    }
}

/// Validation errors collection, keyed by field with free-floating base errors
#[derive(Error, Debug, Default, Clone)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// Turn a non-empty collection into an error, or pass through
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, field_errors) in source.field_errors() {
            for fe in field_errors {
                let message = fe
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("is invalid ({})", fe.code));
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}

/// Status code mapping for service embedding
impl HrError {
    pub fn status_code(&self) -> u16 {
        match self {
            HrError::NotFound { .. } => 404,
            HrError::Forbidden { .. } => 403,
            HrError::InvalidTransition { .. } => 409,
            HrError::Validation(_) => 422,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            HrError::NotFound { .. } => "not_found",
            HrError::Forbidden { .. } => "forbidden",
            HrError::InvalidTransition { .. } => "invalid_transition",
            HrError::Validation(_) => "validation_failed",
        }
    }
}
