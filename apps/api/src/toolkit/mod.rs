// Toolkit API: the HTTP face of the pipeline. Collects a job URL and a resume
// PDF, runs the ingest collaborators, then the pipeline operations in order.

pub mod form;
pub mod handlers;
