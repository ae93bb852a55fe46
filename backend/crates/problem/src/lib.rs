//! Problem Catalogue Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Problem entity, difficulty, repository trait
//! - `application/` - Payload validation and the problem service
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Invariants
//! - Titles are unique across all problems (checked by the service, enforced by the store)
//! - Identifiers and creation timestamps are assigned by the store and never change
//! - Updates are partial: absent fields are left untouched

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProblemConfig;
pub use application::service::ProblemService;
pub use error::{ProblemError, ProblemResult};
pub use infra::memory::MemoryProblemRepository;
pub use infra::postgres::PgProblemRepository;
pub use presentation::router::problem_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
