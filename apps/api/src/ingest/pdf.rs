use tracing::debug;

use super::{IngestError, ResumeReader};

/// Concatenates page texts in order with no separator; the model relies on
/// the text itself, not page markers.
pub fn join_pages(pages: &[String]) -> String {
    pages.concat()
}

/// Resume reader backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfResumeReader;

impl ResumeReader for PdfResumeReader {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, IngestError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| IngestError::Pdf(e.to_string()))?;
        debug!("Extracted {} PDF page(s)", pages.len());
        Ok(pages)
    }
}
