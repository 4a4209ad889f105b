//! The pipeline: one method per prompt, each a render → invoke → parse triplet.

use std::num::NonZeroU32;
use std::sync::Arc;

use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::llm_client::{strip_json_fences, ChatModel};
use crate::models::{JobPosting, ResumeProfile};
use crate::pipeline::emails::EMAIL_DELIMITER;
use crate::pipeline::error::{ParseTarget, PipelineError};
use crate::pipeline::profession::Profession;
use crate::pipeline::prompts::{
    render, ATS_SCORE_TEMPLATE, EXTRACT_JOBS_TEMPLATE, EXTRACT_RESUME_TEMPLATE,
    GENERATE_EMAIL_TEMPLATE, OPTIMIZE_RESUME_TEMPLATE,
};

/// Model and sampling temperature, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub model_name: String,
    pub temperature: f32,
}

impl ChainConfig {
    /// Deterministic settings for the JSON extraction prompts.
    pub fn extraction() -> Self {
        Self {
            model_name: "llama3-70b-8192".to_string(),
            temperature: 0.0,
        }
    }

    /// Some lexical variety for the email and resume prose.
    pub fn generation() -> Self {
        Self {
            model_name: "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            temperature: 0.4,
        }
    }
}

/// Stateless apart from the shared model handle; safe to share across requests.
pub struct Pipeline {
    llm: Arc<dyn ChatModel>,
    config: ChainConfig,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn ChatModel>, config: ChainConfig) -> Self {
        Self { llm, config }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub async fn extract_jobs(
        &self,
        cleaned_page_text: &str,
    ) -> Result<Vec<JobPosting>, PipelineError> {
        let prompt = render(EXTRACT_JOBS_TEMPLATE, &[("page_data", cleaned_page_text)]);
        let raw = self.complete("extract_jobs", &prompt).await?;
        let jobs = parse_jobs(&raw)?;
        info!("Extracted {} job posting(s)", jobs.len());
        Ok(jobs)
    }

    pub async fn extract_resume_info(
        &self,
        resume_text: &str,
    ) -> Result<ResumeProfile, PipelineError> {
        let prompt = render(EXTRACT_RESUME_TEMPLATE, &[("resume_text", resume_text)]);
        let raw = self.complete("extract_resume_info", &prompt).await?;
        parse_resume(&raw)
    }

    /// Returns the raw completion. Use `split_emails` to get individual drafts.
    pub async fn generate_email(
        &self,
        profile: &ResumeProfile,
        job_title: &str,
        job_description: &str,
        num_emails: NonZeroU32,
    ) -> Result<String, PipelineError> {
        let profession = Profession::classify(&profile.experience);
        debug!("Writing {num_emails} email(s) as {profession}");

        let skills = profile.skills_text();
        let projects = profile.projects_text();
        let experience = profile.experience_text();
        let num_emails = num_emails.to_string();
        let prompt = render(
            GENERATE_EMAIL_TEMPLATE,
            &[
                ("job_description", job_description),
                ("name", &profile.name),
                ("skills", &skills),
                ("projects", &projects),
                ("experience", &experience),
                ("profession", profession.as_str()),
                ("job_title", job_title),
                ("num_emails", &num_emails),
                ("delimiter", EMAIL_DELIMITER),
            ],
        );
        self.complete("generate_email", &prompt).await
    }

    pub async fn generate_ats_score(
        &self,
        job_description: &str,
        resume_info: &ResumeProfile,
    ) -> Result<String, PipelineError> {
        let resume_json = serde_json::to_string(resume_info).map_err(PipelineError::Serialize)?;
        let prompt = render(
            ATS_SCORE_TEMPLATE,
            &[
                ("job_description", job_description),
                ("resume_info", &resume_json),
            ],
        );
        self.complete("generate_ats_score", &prompt).await
    }

    /// Rewrites the full resume text against the job description.
    pub async fn optimize_resume(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<String, PipelineError> {
        let prompt = render(
            OPTIMIZE_RESUME_TEMPLATE,
            &[
                ("job_description", job_description),
                ("resume_text", resume_text),
            ],
        );
        self.complete("optimize_resume", &prompt).await
    }

    async fn complete(&self, operation: &str, prompt: &str) -> Result<String, PipelineError> {
        debug!(
            "{operation}: sending {} prompt chars to {}",
            prompt.len(),
            self.llm.model_name()
        );
        let completion = self.llm.invoke(prompt).await?;
        Ok(completion.content)
    }
}

/// Decodes a job-extraction completion. A careers page may yield one posting
/// object or an array of them; a lone object becomes a one-element list.
pub fn parse_jobs(raw: &str) -> Result<Vec<JobPosting>, PipelineError> {
    let jobs: Vec<JobPosting> = match decode::<Value>(raw, ParseTarget::Jobs)? {
        list @ Value::Array(_) => from_value(list, ParseTarget::Jobs)?,
        single @ Value::Object(_) => vec![from_value(single, ParseTarget::Jobs)?],
        _ => {
            return Err(rejected(
                ParseTarget::Jobs,
                "expected a job object or an array of job objects",
            ))
        }
    };
    if jobs.iter().any(|job| !job.has_role()) {
        return Err(rejected(ParseTarget::Jobs, "job posting has an empty `role`"));
    }
    Ok(jobs)
}

/// Decodes a resume-extraction completion into a single profile.
pub fn parse_resume(raw: &str) -> Result<ResumeProfile, PipelineError> {
    let profile: ResumeProfile = decode(raw, ParseTarget::Resume)?;
    if !profile.has_name() {
        return Err(rejected(ParseTarget::Resume, "resume has an empty `name`"));
    }
    Ok(profile)
}

fn decode<T: DeserializeOwned>(raw: &str, target: ParseTarget) -> Result<T, PipelineError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("{target} ({e})");
        PipelineError::parse(target, e)
    })
}

fn from_value<T: DeserializeOwned>(value: Value, target: ParseTarget) -> Result<T, PipelineError> {
    serde_json::from_value(value).map_err(|e| {
        warn!("{target} ({e})");
        PipelineError::parse(target, e)
    })
}

fn rejected(target: ParseTarget, reason: &str) -> PipelineError {
    warn!("{target} ({reason})");
    PipelineError::parse(target, serde_json::Error::custom(reason))
}
