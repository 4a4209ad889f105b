use std::fmt;

use thiserror::Error;

use crate::llm_client::LlmError;

pub const JOBS_PARSE_FAILURE: &str = "Context too big. Unable to parse jobs.";
pub const RESUME_PARSE_FAILURE: &str = "Context too big. Unable to parse resume.";

/// Which JSON-expecting prompt a parse failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTarget {
    Jobs,
    Resume,
}

impl ParseTarget {
    /// Fixed user-facing message. The wording is historical: any malformed
    /// completion produces it, not only oversized input.
    pub fn message(self) -> &'static str {
        match self {
            ParseTarget::Jobs => JOBS_PARSE_FAILURE,
            ParseTarget::Resume => RESUME_PARSE_FAILURE,
        }
    }
}

impl fmt::Display for ParseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The completion was not JSON of the expected shape. The decoder
    /// diagnostic stays reachable through `source()`.
    #[error("{target}")]
    Parse {
        target: ParseTarget,
        #[source]
        source: serde_json::Error,
    },

    /// The extracted profile could not be re-encoded for the scoring prompt.
    #[error("Could not serialize resume profile")]
    Serialize(#[source] serde_json::Error),

    /// Transport or API failure from the LLM collaborator, passed through as-is.
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl PipelineError {
    pub fn parse(target: ParseTarget, source: serde_json::Error) -> Self {
        PipelineError::Parse { target, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("Sorry, I can't process this.").unwrap_err()
    }

    #[test]
    fn test_parse_error_display_is_fixed_message() {
        let jobs = PipelineError::parse(ParseTarget::Jobs, json_error());
        assert_eq!(jobs.to_string(), "Context too big. Unable to parse jobs.");

        let resume = PipelineError::parse(ParseTarget::Resume, json_error());
        assert_eq!(resume.to_string(), "Context too big. Unable to parse resume.");
    }

    #[test]
    fn test_parse_error_keeps_decoder_cause() {
        let err = PipelineError::parse(ParseTarget::Jobs, json_error());
        let cause = err.source().expect("cause should be chained");
        assert!(cause.to_string().contains("expected value"));
    }

    #[test]
    fn test_serialize_error_is_not_a_resume_parse_failure() {
        let err = PipelineError::Serialize(json_error());
        assert_eq!(err.to_string(), "Could not serialize resume profile");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_llm_error_is_transparent() {
        let err = PipelineError::from(LlmError::EmptyContent);
        assert_eq!(err.to_string(), "LLM returned no choices");
    }
}
