use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::de;

/// Candidate fields extracted by the model from resume text.
///
/// `experience` keeps whatever JSON the model produced (a summary string, a
/// list of roles, or nothing) so emptiness can be judged on the raw value.
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    #[serde(default, deserialize_with = "de::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de::string_list")]
    pub projects: Vec<String>,
    #[serde(default)]
    pub experience: Value,
}

impl ResumeProfile {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }

    pub fn projects_text(&self) -> String {
        self.projects.join("; ")
    }

    pub fn experience_text(&self) -> String {
        match &self.experience {
            Value::Null => String::new(),
            other => de::value_to_text(other.clone()),
        }
    }
}
