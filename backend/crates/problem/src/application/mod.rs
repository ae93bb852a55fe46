//! Application Layer
//!
//! Payload validation and the problem service that enforces the
//! uniqueness and existence rules around repository calls.

pub mod config;
pub mod service;
pub mod validation;

// Re-exports
pub use config::ProblemConfig;
pub use service::ProblemService;
pub use validation::{FieldViolation, ViolationKind, Violations, validate_create, validate_update};
