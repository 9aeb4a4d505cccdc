//! # hr-auth
//!
//! Authorization gate for HR Portal RS.
//!
//! A stateless, table-driven role check consulted by the workflow engine
//! before every mutation. Authentication is outside the engine boundary;
//! the gate trusts the role it is handed.

pub mod gate;

pub use gate::{allowed, authorize, Action, Rule};
