//! Problem Service
//!
//! Enforces the title uniqueness and record existence rules around the
//! repository. Every repository call is bounded by
//! [`ProblemConfig::store_timeout`].
//!
//! The title check runs before the write and is not atomic with it. Two
//! concurrent writers can both pass the check; the store's own unique
//! constraint then rejects the second write with the same `Conflict`.

use std::future::Future;
use std::sync::Arc;

use kernel::id::ProblemId;

use crate::application::config::ProblemConfig;
use crate::domain::entities::{NewProblem, Problem, ProblemPatch};
use crate::domain::repository::ProblemRepository;
use crate::error::{ProblemError, ProblemResult};

pub const EMPTY_ID_MESSAGE: &str = "ProblemId is empty";
pub const EMPTY_PAYLOAD_MESSAGE: &str = "problemData is empty";

/// Problem service
pub struct ProblemService<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
    config: Arc<ProblemConfig>,
}

impl<R> ProblemService<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ProblemConfig>) -> Self {
        Self { repo, config }
    }

    /// All problems in store order
    pub async fn list_all(&self) -> ProblemResult<Vec<Problem>> {
        self.bounded(self.repo.list_all()).await
    }

    pub async fn get_by_id(&self, id: &str) -> ProblemResult<Problem> {
        let id = parse_id(id)?;

        self.bounded(self.repo.get_by_id(&id))
            .await?
            .ok_or(ProblemError::NotFound)
    }

    pub async fn create(&self, new: NewProblem) -> ProblemResult<Problem> {
        if self
            .bounded(self.repo.find_by_title(&new.title))
            .await?
            .is_some()
        {
            return Err(ProblemError::Conflict { title: new.title });
        }

        let problem = self.bounded(self.repo.insert(&new)).await?;

        tracing::info!(
            problem_id = %problem.id,
            title = %problem.title,
            difficulty = %problem.difficulty,
            "Problem created"
        );

        Ok(problem)
    }

    /// Apply a partial update
    ///
    /// An empty patch is rejected before the id is looked at.
    pub async fn update(&self, id: &str, patch: ProblemPatch) -> ProblemResult<Problem> {
        if patch.is_empty() {
            return Err(ProblemError::EmptyArgument(EMPTY_PAYLOAD_MESSAGE));
        }
        let id = parse_id(id)?;

        if let Some(title) = &patch.title {
            let existing = self.bounded(self.repo.find_by_title(title)).await?;
            if existing.is_some_and(|other| other.id != id) {
                return Err(ProblemError::Conflict {
                    title: title.clone(),
                });
            }
        }

        let problem = self
            .bounded(self.repo.update_by_id(&id, &patch))
            .await?
            .ok_or(ProblemError::NotFound)?;

        tracing::info!(problem_id = %problem.id, title = %problem.title, "Problem updated");

        Ok(problem)
    }

    /// Delete and return the prior state
    pub async fn delete(&self, id: &str) -> ProblemResult<Problem> {
        let id = parse_id(id)?;

        let problem = self
            .bounded(self.repo.delete_by_id(&id))
            .await?
            .ok_or(ProblemError::NotFound)?;

        tracing::info!(problem_id = %problem.id, title = %problem.title, "Problem deleted");

        Ok(problem)
    }

    async fn bounded<T>(&self, call: impl Future<Output = ProblemResult<T>>) -> ProblemResult<T> {
        let deadline = self.config.store_timeout;
        match tokio::time::timeout(deadline, call).await {
            Ok(result) => result,
            Err(_) => Err(ProblemError::StoreTimeout(deadline)),
        }
    }
}

/// Blank ids are a client error; anything else the store cannot read is not
fn parse_id(raw: &str) -> ProblemResult<ProblemId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProblemError::EmptyArgument(EMPTY_ID_MESSAGE));
    }
    Ok(ProblemId::parse_str(raw)?)
}
