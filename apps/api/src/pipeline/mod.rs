// Prompt-response pipeline: renders the prompt templates, makes one LLM call
// per template instance, and parses each raw completion into its typed shape.
// All LLM calls go through the `ChatModel` trait in llm_client.

pub mod chain;
pub mod emails;
pub mod error;
pub mod profession;
pub mod prompts;

pub use chain::{ChainConfig, Pipeline};
pub use emails::split_emails;
pub use error::PipelineError;
