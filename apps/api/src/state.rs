use std::sync::Arc;

use crate::ingest::{PageSource, ResumeReader};
use crate::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Job page fetcher. Default: HttpPageSource.
    pub pages: Arc<dyn PageSource>,
    /// Resume text extractor. Default: PdfResumeReader.
    pub resumes: Arc<dyn ResumeReader>,
}
