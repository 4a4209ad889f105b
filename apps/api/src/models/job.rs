use serde::{Deserialize, Serialize};

use crate::models::de;

/// A job posting as extracted by the model from a careers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    #[serde(default, deserialize_with = "de::text")]
    pub experience: String,
    #[serde(default, deserialize_with = "de::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
}

impl JobPosting {
    pub fn has_role(&self) -> bool {
        !self.role.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_full_deserializes_correctly() {
        let json = r#"{
            "role": "Software Engineer",
            "experience": "2+ years",
            "skills": ["Python", "Go"],
            "description": "Build backend services"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.role, "Software Engineer");
        assert_eq!(job.experience, "2+ years");
        assert_eq!(job.skills, vec!["Python", "Go"]);
        assert_eq!(job.description, "Build backend services");
        assert!(job.has_role());
    }

    #[test]
    fn test_job_posting_optional_fields_default() {
        let job: JobPosting = serde_json::from_str(r#"{"role": "Data Analyst"}"#).unwrap();
        assert!(job.experience.is_empty());
        assert!(job.skills.is_empty());
        assert!(job.description.is_empty());
    }

    #[test]
    fn test_job_posting_requires_role_key() {
        let result = serde_json::from_str::<JobPosting>(r#"{"experience": "1 year"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_role_is_not_a_role() {
        let job: JobPosting = serde_json::from_str(r#"{"role": "  "}"#).unwrap();
        assert!(!job.has_role());
    }
}
