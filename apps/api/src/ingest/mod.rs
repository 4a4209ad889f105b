//! Ingest collaborators: turn a job URL into cleaned page text and a resume
//! PDF into per-page text. The pipeline only ever sees the resulting strings.

use async_trait::async_trait;
use thiserror::Error;

pub mod page;
pub mod pdf;

pub use page::{clean_text, HttpPageSource};
pub use pdf::{join_pages, PdfResumeReader};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Page returned status {0}")]
    Status(u16),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Fetches a page and returns its visible text, whitespace-normalized.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, IngestError>;
}

/// Extracts text from an uploaded resume, one string per page, in page order.
pub trait ResumeReader: Send + Sync {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, IngestError>;
}
