//! Multipart form collection for the toolkit endpoints.

use std::num::NonZeroU32;

use axum::extract::Multipart;
use bytes::Bytes;
use reqwest::Url;
use tracing::debug;

use crate::errors::AppError;

/// Job title used when the caller does not name one.
pub const DEFAULT_JOB_TITLE: &str = "Application Developer";
/// Upper bound on drafts per request, as offered by the form.
pub const MAX_EMAILS: u32 = 5;

/// Raw form fields as received. Validation happens in the accessors.
#[derive(Debug, Default)]
pub struct ToolkitForm {
    pub url: Option<String>,
    pub resume: Option<Bytes>,
    pub num_emails: Option<String>,
    pub job_title: Option<String>,
}

impl ToolkitForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ToolkitForm::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => form.resume = Some(field.bytes().await.map_err(malformed)?),
                "url" => form.url = Some(field.text().await.map_err(malformed)?),
                "num_emails" => form.num_emails = Some(field.text().await.map_err(malformed)?),
                "job_title" => form.job_title = Some(field.text().await.map_err(malformed)?),
                other => debug!("Ignoring unknown form field '{other}'"),
            }
        }

        Ok(form)
    }

    /// The job page URL; must be an absolute http(s) URL.
    pub fn url(&self) -> Result<String, AppError> {
        let raw = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Validation("url is required".to_string()))?;
        validate_url(raw)
    }

    pub fn resume(&self) -> Result<Bytes, AppError> {
        self.resume
            .clone()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| AppError::Validation("resume PDF is required".to_string()))
    }

    /// Defaults to 1; accepts 1 through `MAX_EMAILS`.
    pub fn num_emails(&self) -> Result<NonZeroU32, AppError> {
        let Some(raw) = self.num_emails.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(NonZeroU32::MIN);
        };
        raw.parse::<u32>()
            .ok()
            .filter(|n| *n <= MAX_EMAILS)
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                AppError::Validation(format!("num_emails must be between 1 and {MAX_EMAILS}"))
            })
    }

    pub fn job_title(&self) -> String {
        self.job_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_JOB_TITLE)
            .to_string()
    }
}

pub fn validate_url(raw: &str) -> Result<String, AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::Validation(format!("url is not valid: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "url must use http or https".to_string(),
        ));
    }
    Ok(url.to_string())
}

fn malformed(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {err}"))
}
