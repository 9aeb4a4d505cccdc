//! # hr-core
//!
//! Core types, traits, and utilities for HR Portal RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types (`HrError`, `ValidationErrors`)
//! - Result type alias (`HrResult`)
//! - Core traits (Entity, Identifiable)
//! - Shared types (ids, roles, actors)
//! - Policy configuration

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
