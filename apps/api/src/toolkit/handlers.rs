//! Axum route handlers for the toolkit API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::{join_pages, ResumeReader};
use crate::models::{JobPosting, ResumeProfile};
use crate::pipeline::split_emails;
use crate::state::AppState;
use crate::toolkit::form::{validate_url, ToolkitForm};

const ATS_RESUME_FILENAME: &str = "ATS_Resume.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OutreachResponse {
    pub job_description: String,
    pub resume_info: ResumeProfile,
    pub emails: Vec<String>,
    pub ats_score: String,
}

#[derive(Debug, Deserialize)]
pub struct AtsResumeQuery {
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Serialize)]
pub struct AtsResumeResponse {
    pub job_description: String,
    pub optimized_resume: String,
}

/// Either a URL to scrape or page text that was already cleaned by the caller.
#[derive(Debug, Deserialize)]
pub struct ExtractJobsRequest {
    pub url: Option<String>,
    pub page_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractJobsResponse {
    pub jobs: Vec<JobPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/outreach
///
/// Multipart: `url`, `resume` (PDF), optional `num_emails` and `job_title`.
/// Scrape → resume extraction → cold emails → ATS score, one call after another.
pub async fn handle_outreach(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<OutreachResponse>, AppError> {
    let form = ToolkitForm::read(multipart).await?;
    let url = form.url()?;
    let resume = form.resume()?;
    let num_emails = form.num_emails()?;
    let job_title = form.job_title();

    let job_description = state.pages.fetch_text(&url).await?;
    let resume_text = read_resume_text(state.resumes.clone(), resume).await?;

    let resume_info = state.pipeline.extract_resume_info(&resume_text).await?;
    let raw_emails = state
        .pipeline
        .generate_email(&resume_info, &job_title, &job_description, num_emails)
        .await?;
    let emails = split_emails(&raw_emails);
    let ats_score = state
        .pipeline
        .generate_ats_score(&job_description, &resume_info)
        .await?;

    info!(
        "Outreach generated {} of {} requested email(s) for '{}'",
        emails.len(),
        num_emails,
        job_title
    );

    Ok(Json(OutreachResponse {
        job_description,
        resume_info,
        emails,
        ats_score,
    }))
}

/// POST /api/v1/ats-resume[?download=true]
///
/// Multipart: `url`, `resume` (PDF). Returns the ATS-optimized resume as JSON,
/// or as a `text/plain` attachment when `download=true`.
pub async fn handle_ats_resume(
    State(state): State<AppState>,
    Query(query): Query<AtsResumeQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = ToolkitForm::read(multipart).await?;
    let url = form.url()?;
    let resume = form.resume()?;

    let job_description = state.pages.fetch_text(&url).await?;
    let resume_text = read_resume_text(state.resumes.clone(), resume).await?;
    let optimized_resume = state
        .pipeline
        .optimize_resume(&job_description, &resume_text)
        .await?;

    if query.download {
        let disposition = format!("attachment; filename=\"{ATS_RESUME_FILENAME}\"");
        return Ok((
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            optimized_resume,
        )
            .into_response());
    }

    Ok(Json(AtsResumeResponse {
        job_description,
        optimized_resume,
    })
    .into_response())
}

/// POST /api/v1/jobs/extract
///
/// Lists the postings the model finds on a careers page.
pub async fn handle_extract_jobs(
    State(state): State<AppState>,
    Json(request): Json<ExtractJobsRequest>,
) -> Result<Json<ExtractJobsResponse>, AppError> {
    let page_text = match (request.url.as_deref(), request.page_text.as_deref()) {
        (_, Some(text)) if !text.trim().is_empty() => crate::ingest::clean_text(text),
        (Some(url), _) if !url.trim().is_empty() => {
            let url = validate_url(url.trim())?;
            state.pages.fetch_text(&url).await?
        }
        _ => {
            return Err(AppError::Validation(
                "either url or page_text is required".to_string(),
            ))
        }
    };

    let jobs = state.pipeline.extract_jobs(&page_text).await?;
    Ok(Json(ExtractJobsResponse { jobs }))
}

/// Runs the PDF reader off the async runtime and joins the pages.
async fn read_resume_text(
    reader: Arc<dyn ResumeReader>,
    bytes: Bytes,
) -> Result<String, AppError> {
    let pages = tokio::task::spawn_blocking(move || reader.read_pages(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF reader aborted: {e}")))??;
    Ok(join_pages(&pages))
}
