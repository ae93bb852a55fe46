//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::{NewProblem, Problem, ProblemPatch};
use crate::error::ProblemResult;
use kernel::id::ProblemId;

/// Problem repository trait
///
/// Every method maps to a single store operation. Absence is reported as
/// `None`, never as an error.
#[trait_variant::make(ProblemRepository: Send)]
pub trait LocalProblemRepository {
    /// List every problem in the store's natural order
    async fn list_all(&self) -> ProblemResult<Vec<Problem>>;

    /// Get a problem by ID
    async fn get_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>>;

    /// Find the problem carrying exactly this title
    async fn find_by_title(&self, title: &str) -> ProblemResult<Option<Problem>>;

    /// Insert a new problem, returning it with its assigned ID and timestamp
    ///
    /// Fails with `ProblemError::Conflict` if the store's title uniqueness
    /// constraint rejects the row.
    async fn insert(&self, new: &NewProblem) -> ProblemResult<Problem>;

    /// Apply a partial update and return the updated problem
    async fn update_by_id(
        &self,
        id: &ProblemId,
        patch: &ProblemPatch,
    ) -> ProblemResult<Option<Problem>>;

    /// Delete a problem and return its prior state
    async fn delete_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>>;
}
