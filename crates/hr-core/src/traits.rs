//! Foundational traits shared by all domain entities

use crate::types::Id;

/// Trait for entities addressable by identifier
pub trait Identifiable {
    fn id(&self) -> &Id;
}

/// Base trait for all domain entities
pub trait Entity: Identifiable {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
