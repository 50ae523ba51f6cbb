// Chat relay: prompt assembly, upstream completion, response shaping.
// All completions go through llm_client, never to a provider directly.

pub mod files;
pub mod handlers;
pub mod models;
pub mod postprocess;
pub mod prompt;
pub mod relay;
