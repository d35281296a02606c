// Document generation: model output cleanup, prompts, and the per-submission pipeline.
// All model calls go through llm_client::TextGenerator.

pub mod cleaner;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod truncate;
