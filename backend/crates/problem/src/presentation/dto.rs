//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::ProblemId;
use serde::Serialize;

use crate::domain::entities::Problem;
use crate::domain::value_objects::{Difficulty, Example};

/// Success envelope: `{ "data": ..., "message": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: &'static str,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: &'static str) -> Self {
        Self { data, message }
    }
}

/// Wire form of a problem
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub id: ProblemId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub input_format: String,
    pub output_format: String,
    pub examples: Vec<Example>,
    pub constraints: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            tags: problem.tags,
            input_format: problem.input_format,
            output_format: problem.output_format,
            examples: problem.examples,
            constraints: problem.constraints,
            solution: problem.solution,
            created_at: problem.created_at,
        }
    }
}
