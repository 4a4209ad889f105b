//! Applicant classification used for email tone.

use std::fmt;

use serde_json::Value;

/// How the applicant introduces themself in generated emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profession {
    Student,
    Candidate,
}

impl Profession {
    /// `Student` when `experience` is empty in the truthiness sense: null or
    /// absent, `""`, `[]`, `{}`, `false`, or zero. Anything else is `Candidate`.
    /// Whitespace-only strings count as non-empty.
    pub fn classify(experience: &Value) -> Self {
        if is_truthy(experience) {
            Profession::Candidate
        } else {
            Profession::Student
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profession::Student => "student",
            Profession::Candidate => "candidate",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
