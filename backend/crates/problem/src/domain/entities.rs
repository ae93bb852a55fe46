//! Domain Entities
//!
//! Core business entities for the problem catalogue.

use chrono::{DateTime, Utc};
use kernel::id::ProblemId;

use crate::domain::value_objects::{Difficulty, Example};

/// Problem entity - one coding challenge as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub input_format: String,
    pub output_format: String,
    pub examples: Vec<Example>,
    pub constraints: String,
    pub solution: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Materialize a new problem with the identity and timestamp assigned by a store
    pub fn from_new(id: ProblemId, created_at: DateTime<Utc>, new: NewProblem) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            difficulty: new.difficulty,
            tags: new.tags,
            input_format: new.input_format,
            output_format: new.output_format,
            examples: new.examples,
            constraints: new.constraints,
            solution: new.solution,
            created_at,
        }
    }

    /// Apply a partial update in place. Absent fields are left unchanged.
    pub fn apply(&mut self, patch: &ProblemPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(input_format) = &patch.input_format {
            self.input_format = input_format.clone();
        }
        if let Some(output_format) = &patch.output_format {
            self.output_format = output_format.clone();
        }
        if let Some(examples) = &patch.examples {
            self.examples = examples.clone();
        }
        if let Some(constraints) = &patch.constraints {
            self.constraints = constraints.clone();
        }
        if let Some(solution) = &patch.solution {
            self.solution = Some(solution.clone());
        }
    }
}

/// A validated problem that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub input_format: String,
    pub output_format: String,
    pub examples: Vec<Example>,
    pub constraints: String,
    pub solution: Option<String>,
}

/// A validated partial update
///
/// `None` means "leave unchanged". A solution can be replaced but not cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub tags: Option<Vec<String>>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub examples: Option<Vec<Example>>,
    pub constraints: Option<String>,
    pub solution: Option<String>,
}

impl ProblemPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.difficulty.is_none()
            && self.tags.is_none()
            && self.input_format.is_none()
            && self.output_format.is_none()
            && self.examples.is_none()
            && self.constraints.is_none()
            && self.solution.is_none()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn new_problem(title: &str) -> NewProblem {
        NewProblem {
            title: title.to_string(),
            description: "Return the sum of all elements.".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["array".to_string(), "math".to_string()],
            input_format: "A line of space separated integers.".to_string(),
            output_format: "A single integer.".to_string(),
            examples: vec![Example::new("1 2 3", "6"), Example::new("5", "5")],
            constraints: "1 <= n <= 100".to_string(),
            solution: Some("Fold with addition.".to_string()),
        }
    }
}
