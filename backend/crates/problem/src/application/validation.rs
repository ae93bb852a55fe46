//! Payload Validation
//!
//! Checks an incoming JSON body against the problem shape before it reaches
//! the service. Every violation of a payload is collected, in field order;
//! nothing panics for bad input.
//!
//! ## Rules
//! - `title`, `description`, `inputFormat`, `outputFormat`, `constraints`: non-empty strings
//! - `difficulty`: one of `Easy`, `Medium`, `Hard`
//! - `tags`: array of non-empty strings (may be empty)
//! - `examples`: array of `{ input, output }` string pairs
//! - `solution`: optional string
//! - Unknown keys are dropped
//!
//! On update every field is optional; absence (or `null`) means "unchanged".

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::service::EMPTY_PAYLOAD_MESSAGE;
use crate::domain::entities::{NewProblem, ProblemPatch};
use crate::domain::value_objects::{Difficulty, Example};
use crate::error::{ProblemError, ProblemResult};

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Wrong JSON type (or missing where required)
    InvalidType,
    /// Value outside the enumerated set
    InvalidEnum,
    /// Blank string
    Empty,
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// All violations found in one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn items(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    fn push(&mut self, field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, kind, message));
    }
}

impl From<Vec<FieldViolation>> for Violations {
    fn from(items: Vec<FieldViolation>) -> Self {
        Self(items)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(&violation.message)?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Validate a create payload
///
/// `null` and `{}` are rejected as empty before any field is inspected.
pub fn validate_create(payload: &Value) -> ProblemResult<NewProblem> {
    if is_empty_payload(payload) {
        return Err(ProblemError::EmptyArgument(EMPTY_PAYLOAD_MESSAGE));
    }
    check_new_problem(payload).map_err(ProblemError::Validation)
}

/// Validate an update payload
///
/// An empty body becomes an empty patch; the service decides what that means.
pub fn validate_update(payload: &Value) -> ProblemResult<ProblemPatch> {
    if payload.is_null() {
        return Ok(ProblemPatch::default());
    }
    check_problem_patch(payload).map_err(ProblemError::Validation)
}

/// Check a full problem payload
pub fn check_new_problem(payload: &Value) -> Result<NewProblem, Violations> {
    let mut reader = FieldReader::new(payload, Mode::Create)?;

    let title = reader.text("title");
    let description = reader.text("description");
    let difficulty = reader.difficulty();
    let tags = reader.tags();
    let input_format = reader.text("inputFormat");
    let output_format = reader.text("outputFormat");
    let examples = reader.examples();
    let constraints = reader.text("constraints");
    let solution = reader.solution();

    match (
        title,
        description,
        difficulty,
        tags,
        input_format,
        output_format,
        examples,
        constraints,
    ) {
        (
            Some(title),
            Some(description),
            Some(difficulty),
            Some(tags),
            Some(input_format),
            Some(output_format),
            Some(examples),
            Some(constraints),
        ) if reader.violations.is_empty() => Ok(NewProblem {
            title,
            description,
            difficulty,
            tags,
            input_format,
            output_format,
            examples,
            constraints,
            solution,
        }),
        _ => Err(reader.violations),
    }
}

/// Check a partial problem payload
pub fn check_problem_patch(payload: &Value) -> Result<ProblemPatch, Violations> {
    let mut reader = FieldReader::new(payload, Mode::Update)?;

    let patch = ProblemPatch {
        title: reader.text("title"),
        description: reader.text("description"),
        difficulty: reader.difficulty(),
        tags: reader.tags(),
        input_format: reader.text("inputFormat"),
        output_format: reader.text("outputFormat"),
        examples: reader.examples(),
        constraints: reader.text("constraints"),
        solution: reader.solution(),
    };

    if reader.violations.is_empty() {
        Ok(patch)
    } else {
        Err(reader.violations)
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

// ============================================================================
// Field reader
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    mode: Mode,
    violations: Violations,
}

impl<'a> FieldReader<'a> {
    fn new(payload: &'a Value, mode: Mode) -> Result<Self, Violations> {
        match payload {
            Value::Object(object) => Ok(Self {
                object,
                mode,
                violations: Violations::default(),
            }),
            _ => Err(Violations::from(vec![FieldViolation::new(
                "body",
                ViolationKind::InvalidType,
                "problemData must be an object",
            )])),
        }
    }

    /// Present, non-null value of a field
    ///
    /// A missing field is only a violation on create, where it is reported
    /// through `on_missing`.
    fn present(
        &mut self,
        field: &str,
        on_missing: impl FnOnce(&mut Violations),
    ) -> Option<&'a Value> {
        match self.object.get(field) {
            Some(Value::Null) | None => {
                if self.mode == Mode::Create {
                    on_missing(&mut self.violations);
                }
                None
            }
            Some(value) => Some(value),
        }
    }

    fn text(&mut self, field: &'static str) -> Option<String> {
        let not_string = format!("{field} must be a string");
        let value = self.present(field, |v| {
            v.push(field, ViolationKind::InvalidType, not_string.clone())
        })?;

        match value {
            Value::String(s) if s.trim().is_empty() => {
                self.violations.push(
                    field,
                    ViolationKind::Empty,
                    format!("{field} should not be empty"),
                );
                None
            }
            // Titles are compared for uniqueness, so surrounding whitespace is dropped
            Value::String(s) if field == "title" => Some(s.trim().to_string()),
            Value::String(s) => Some(s.clone()),
            _ => {
                self.violations
                    .push(field, ViolationKind::InvalidType, not_string);
                None
            }
        }
    }

    fn difficulty(&mut self) -> Option<Difficulty> {
        let message = format!(
            "difficulty must be one of the following values: {}",
            Difficulty::accepted_codes()
        );
        let value = self.present("difficulty", |v| {
            v.push("difficulty", ViolationKind::InvalidEnum, message.clone())
        })?;

        match value.as_str().and_then(Difficulty::from_code) {
            Some(difficulty) => Some(difficulty),
            None => {
                self.violations
                    .push("difficulty", ViolationKind::InvalidEnum, message);
                None
            }
        }
    }

    fn tags(&mut self) -> Option<Vec<String>> {
        let value = self.present("tags", |v| {
            v.push("tags", ViolationKind::InvalidType, "tags must be an array")
        })?;

        let Value::Array(items) = value else {
            self.violations
                .push("tags", ViolationKind::InvalidType, "tags must be an array");
            return None;
        };

        let mut tags = Vec::with_capacity(items.len());
        let mut wrong_type = false;
        let mut blank = false;
        for item in items {
            match item {
                Value::String(s) if s.trim().is_empty() => blank = true,
                Value::String(s) => tags.push(s.clone()),
                _ => wrong_type = true,
            }
        }

        if wrong_type {
            self.violations.push(
                "tags",
                ViolationKind::InvalidType,
                "each value in tags must be a string",
            );
        }
        if blank {
            self.violations.push(
                "tags",
                ViolationKind::Empty,
                "each value in tags should not be empty",
            );
        }
        (!wrong_type && !blank).then_some(tags)
    }

    fn examples(&mut self) -> Option<Vec<Example>> {
        let value = self.present("examples", |v| {
            v.push(
                "examples",
                ViolationKind::InvalidType,
                "examples must be an array",
            )
        })?;

        let Value::Array(items) = value else {
            self.violations.push(
                "examples",
                ViolationKind::InvalidType,
                "examples must be an array",
            );
            return None;
        };

        let before = self.violations.items().len();
        let mut examples = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let input = self.example_part(item, index, "input");
            let output = self.example_part(item, index, "output");
            if let (Some(input), Some(output)) = (input, output) {
                examples.push(Example { input, output });
            }
        }

        (self.violations.items().len() == before).then_some(examples)
    }

    fn example_part(&mut self, item: &Value, index: usize, part: &str) -> Option<String> {
        match item.get(part) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => {
                let field = format!("examples.{index}.{part}");
                let message = format!("{field} must be a string");
                self.violations
                    .push(field, ViolationKind::InvalidType, message);
                None
            }
        }
    }

    /// Optional in both modes; an empty string is a recorded (empty) solution
    fn solution(&mut self) -> Option<String> {
        match self.object.get("solution") {
            Some(Value::Null) | None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.violations.push(
                    "solution",
                    ViolationKind::InvalidType,
                    "solution must be a string",
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "Sum Array",
            "description": "Return the sum of all elements.",
            "difficulty": "Easy",
            "tags": ["array", "math"],
            "inputFormat": "A line of space separated integers.",
            "outputFormat": "A single integer.",
            "examples": [{ "input": "1 2 3", "output": "6" }],
            "constraints": "1 <= n <= 100",
            "solution": "Fold with addition."
        })
    }

    #[test]
    fn test_valid_create_payload() {
        let new = validate_create(&valid_payload()).unwrap();

        assert_eq!(new.title, "Sum Array");
        assert_eq!(new.difficulty, Difficulty::Easy);
        assert_eq!(new.tags, vec!["array", "math"]);
        assert_eq!(new.examples, vec![Example::new("1 2 3", "6")]);
        assert_eq!(new.solution.as_deref(), Some("Fold with addition."));
    }

    #[test]
    fn test_title_is_trimmed() {
        let mut payload = valid_payload();
        payload["title"] = json!("  Sum Array  ");

        let new = validate_create(&payload).unwrap();
        assert_eq!(new.title, "Sum Array");
    }

    #[test]
    fn test_solution_absent_or_null_is_none() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("solution");
        assert_eq!(validate_create(&payload).unwrap().solution, None);

        payload["solution"] = Value::Null;
        assert_eq!(validate_create(&payload).unwrap().solution, None);

        payload["solution"] = json!("");
        let new = validate_create(&payload).unwrap();
        assert_eq!(new.solution.as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let mut payload = valid_payload();
        payload["_id"] = json!("forged");
        payload["createdAt"] = json!("1970-01-01T00:00:00Z");

        assert!(validate_create(&payload).is_ok());
    }

    #[test]
    fn test_invalid_difficulty_lists_accepted_values() {
        let mut payload = valid_payload();
        payload["difficulty"] = json!("Impossible");

        let Err(ProblemError::Validation(violations)) = validate_create(&payload) else {
            panic!("expected validation failure");
        };
        assert_eq!(violations.items().len(), 1);
        assert_eq!(violations.items()[0].kind, ViolationKind::InvalidEnum);
        assert_eq!(
            violations.to_string(),
            "difficulty must be one of the following values: Easy, Medium, Hard"
        );
    }

    #[test]
    fn test_wrong_types_are_reported() {
        let mut payload = valid_payload();
        payload["title"] = json!(42);
        payload["tags"] = json!(["ok", 7]);
        payload["examples"] = json!("not a list");
        payload["solution"] = json!(false);

        let violations = check_new_problem(&payload).unwrap_err();
        assert!(violations.has_field("title"));
        assert!(violations.has_field("tags"));
        assert!(violations.has_field("examples"));
        assert!(violations.has_field("solution"));
        assert!(
            violations
                .items()
                .iter()
                .all(|v| v.kind == ViolationKind::InvalidType)
        );
        assert_eq!(
            violations.to_string(),
            "title must be a string, each value in tags must be a string, \
             examples must be an array, solution must be a string"
        );
    }

    #[test]
    fn test_missing_fields_on_create() {
        let violations = check_new_problem(&json!({ "title": "Only a title" })).unwrap_err();

        for field in [
            "description",
            "difficulty",
            "tags",
            "inputFormat",
            "outputFormat",
            "examples",
            "constraints",
        ] {
            assert!(violations.has_field(field), "missing violation for {field}");
        }
        assert!(!violations.has_field("title"));
        assert!(!violations.has_field("solution"));
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let mut payload = valid_payload();
        payload["description"] = json!("   ");
        payload["tags"] = json!(["array", ""]);

        let violations = check_new_problem(&payload).unwrap_err();
        assert_eq!(violations.items().len(), 2);
        assert!(
            violations
                .items()
                .iter()
                .all(|v| v.kind == ViolationKind::Empty)
        );
    }

    #[test]
    fn test_example_pairs_need_both_fields() {
        let mut payload = valid_payload();
        payload["examples"] = json!([{ "input": "1" }, { "input": 2, "output": "2" }]);

        let violations = check_new_problem(&payload).unwrap_err();
        assert!(violations.has_field("examples.0.output"));
        assert!(violations.has_field("examples.1.input"));
        assert!(!violations.has_field("examples.0.input"));
    }

    #[test]
    fn test_empty_tags_and_examples_are_accepted() {
        let mut payload = valid_payload();
        payload["tags"] = json!([]);
        payload["examples"] = json!([]);

        let new = validate_create(&payload).unwrap();
        assert!(new.tags.is_empty());
        assert!(new.examples.is_empty());
    }

    #[test]
    fn test_empty_create_payload() {
        for payload in [json!({}), Value::Null] {
            let err = validate_create(&payload).unwrap_err();
            assert!(matches!(err, ProblemError::EmptyArgument(EMPTY_PAYLOAD_MESSAGE)));
        }
    }

    #[test]
    fn test_non_object_payload() {
        let Err(ProblemError::Validation(violations)) = validate_create(&json!([1, 2])) else {
            panic!("expected validation failure");
        };
        assert!(violations.has_field("body"));
    }

    #[test]
    fn test_partial_update_payload() {
        let payload = json!({ "title": " Renamed ", "difficulty": "Hard" });
        let patch = validate_update(&payload).unwrap();

        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.difficulty, Some(Difficulty::Hard));
        assert!(patch.description.is_none());
        assert!(patch.tags.is_none());
        assert!(patch.examples.is_none());
    }

    #[test]
    fn test_update_still_checks_present_fields() {
        let Err(ProblemError::Validation(violations)) =
            validate_update(&json!({ "difficulty": "Impossible", "tags": "x" }))
        else {
            panic!("expected validation failure");
        };
        assert!(violations.has_field("difficulty"));
        assert!(violations.has_field("tags"));
    }

    #[test]
    fn test_empty_update_payload_is_empty_patch() {
        assert!(validate_update(&json!({})).unwrap().is_empty());
        assert!(validate_update(&Value::Null).unwrap().is_empty());

        let unknown_only = json!({ "unknown": 1 });
        assert!(validate_update(&unknown_only).unwrap().is_empty());
    }

    #[test]
    fn test_violation_serialization() {
        let violation =
            FieldViolation::new("tags", ViolationKind::InvalidType, "tags must be an array");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(
            json,
            json!({ "field": "tags", "kind": "INVALID_TYPE", "message": "tags must be an array" })
        );
    }
}
