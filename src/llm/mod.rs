pub mod noop;
pub mod openai;
mod prompt_builder;
mod prompts;

pub use prompts::DEFAULT_SYSTEM_PROMPT;

use anyhow::Result;

/// Trait for talking to an LLM (real backend).
pub trait LlmClient {
    /// Turn a raw commit log into release notes, steered by `system_prompt`.
    fn generate_release_notes(&self, system_prompt: &str, commit_log: &str) -> Result<String>;
}
