//! In-Memory Repository Implementation
//!
//! Keeps problems in insertion order behind one `RwLock`. Title uniqueness
//! is checked under the write lock, mirroring the database's unique index.

use chrono::Utc;
use kernel::id::ProblemId;
use tokio::sync::RwLock;

use crate::domain::entities::{NewProblem, Problem, ProblemPatch};
use crate::domain::repository::ProblemRepository;
use crate::error::{ProblemError, ProblemResult};

/// Process-local problem store
#[derive(Default)]
pub struct MemoryProblemRepository {
    problems: RwLock<Vec<Problem>>,
}

impl MemoryProblemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProblemRepository for MemoryProblemRepository {
    async fn list_all(&self) -> ProblemResult<Vec<Problem>> {
        Ok(self.problems.read().await.clone())
    }

    async fn get_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let problems = self.problems.read().await;
        Ok(problems.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> ProblemResult<Option<Problem>> {
        let problems = self.problems.read().await;
        Ok(problems.iter().find(|p| p.title == title).cloned())
    }

    async fn insert(&self, new: &NewProblem) -> ProblemResult<Problem> {
        let mut problems = self.problems.write().await;
        if problems.iter().any(|p| p.title == new.title) {
            return Err(ProblemError::Conflict {
                title: new.title.clone(),
            });
        }

        let problem = Problem::from_new(ProblemId::new(), Utc::now(), new.clone());
        problems.push(problem.clone());

        tracing::debug!(problem_id = %problem.id, "Problem stored in memory");
        Ok(problem)
    }

    async fn update_by_id(
        &self,
        id: &ProblemId,
        patch: &ProblemPatch,
    ) -> ProblemResult<Option<Problem>> {
        let mut problems = self.problems.write().await;

        if let Some(title) = &patch.title {
            if problems.iter().any(|p| p.title == *title && p.id != *id) {
                return Err(ProblemError::Conflict {
                    title: title.clone(),
                });
            }
        }

        Ok(problems.iter_mut().find(|p| p.id == *id).map(|problem| {
            problem.apply(patch);
            problem.clone()
        }))
    }

    async fn delete_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let mut problems = self.problems.write().await;
        Ok(problems
            .iter()
            .position(|p| p.id == *id)
            .map(|index| problems.remove(index)))
    }
}
