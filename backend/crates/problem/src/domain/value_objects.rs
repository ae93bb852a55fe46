//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem difficulty
///
/// Stored and transmitted by its code (`"Easy"`, `"Medium"`, `"Hard"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every accepted difficulty, in display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    /// Parse from its code. Matching is exact (case-sensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Comma separated list of accepted codes
    pub fn accepted_codes() -> String {
        Self::ALL
            .iter()
            .map(Difficulty::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One sample input/output pair shown with a problem
///
/// Embedded in the problem document; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
}

impl Example {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
