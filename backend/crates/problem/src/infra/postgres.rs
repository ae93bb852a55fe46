//! PostgreSQL Repository Implementation
//!
//! One row per problem. `tags` is a `TEXT[]` and `examples` a `JSONB` list,
//! so a problem is read and written as a single document. The id and
//! `created_at` are defaulted by the database.

use chrono::{DateTime, Utc};
use kernel::id::ProblemId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{NewProblem, Problem, ProblemPatch};
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::{Difficulty, Example};
use crate::error::{ProblemError, ProblemResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProblemRepository for PgProblemRepository {
    async fn list_all(&self) -> ProblemResult<Vec<Problem>> {
        let rows = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            FROM problems
            ORDER BY created_at, problem_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProblemRow::into_problem).collect()
    }

    async fn get_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            FROM problems
            WHERE problem_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProblemRow::into_problem).transpose()
    }

    async fn find_by_title(&self, title: &str) -> ProblemResult<Option<Problem>> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            SELECT
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            FROM problems
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProblemRow::into_problem).transpose()
    }

    async fn insert(&self, new: &NewProblem) -> ProblemResult<Problem> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            INSERT INTO problems (
                title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.difficulty.code())
        .bind(&new.tags)
        .bind(&new.input_format)
        .bind(&new.output_format)
        .bind(Json(&new.examples))
        .bind(&new.constraints)
        .bind(&new.solution)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| title_conflict_or(e, &new.title))?;

        tracing::info!(problem_id = %row.problem_id, "Problem row inserted");

        row.into_problem()
    }

    async fn update_by_id(
        &self,
        id: &ProblemId,
        patch: &ProblemPatch,
    ) -> ProblemResult<Option<Problem>> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            UPDATE problems SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                tags = COALESCE($5, tags),
                input_format = COALESCE($6, input_format),
                output_format = COALESCE($7, output_format),
                examples = COALESCE($8, examples),
                constraints = COALESCE($9, constraints),
                solution = COALESCE($10, solution)
            WHERE problem_id = $1
            RETURNING
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.difficulty.map(|d| d.code()))
        .bind(&patch.tags)
        .bind(&patch.input_format)
        .bind(&patch.output_format)
        .bind(patch.examples.as_ref().map(Json))
        .bind(&patch.constraints)
        .bind(&patch.solution)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &patch.title {
            Some(title) => title_conflict_or(e, title),
            None => ProblemError::Database(e),
        })?;

        row.map(ProblemRow::into_problem).transpose()
    }

    async fn delete_by_id(&self, id: &ProblemId) -> ProblemResult<Option<Problem>> {
        let row = sqlx::query_as::<_, ProblemRow>(
            r#"
            DELETE FROM problems
            WHERE problem_id = $1
            RETURNING
                problem_id, title, description, difficulty, tags,
                input_format, output_format, examples, constraints,
                solution, created_at
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProblemRow::into_problem).transpose()
    }
}

/// The `problems_title_key` unique index closes the gap between the
/// service's title check and the write
fn title_conflict_or(err: sqlx::Error, title: &str) -> ProblemError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!(title = %title, "Title uniqueness enforced by store");
            ProblemError::Conflict {
                title: title.to_string(),
            }
        }
        _ => ProblemError::Database(err),
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProblemRow {
    problem_id: Uuid,
    title: String,
    description: String,
    difficulty: String,
    tags: Vec<String>,
    input_format: String,
    output_format: String,
    examples: Json<Vec<Example>>,
    constraints: String,
    solution: Option<String>,
    created_at: DateTime<Utc>,
}

impl ProblemRow {
    fn into_problem(self) -> ProblemResult<Problem> {
        let difficulty = Difficulty::from_code(&self.difficulty).ok_or_else(|| {
            ProblemError::Internal(format!(
                "Unknown difficulty '{}' stored for problem {}",
                self.difficulty, self.problem_id
            ))
        })?;

        Ok(Problem {
            id: ProblemId::from_uuid(self.problem_id),
            title: self.title,
            description: self.description,
            difficulty,
            tags: self.tags,
            input_format: self.input_format,
            output_format: self.output_format,
            examples: self.examples.0,
            constraints: self.constraints,
            solution: self.solution,
            created_at: self.created_at,
        })
    }
}
