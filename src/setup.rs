use crate::config::Config;
use crate::error::{ReleaseNotesError, Result};
use crate::llm::LlmClient;
use crate::llm::noop::NoopClient;
use crate::llm::openai::OpenAiClient;
use log::debug;

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cfg: &Config, no_model: bool) -> Result<Box<dyn LlmClient>> {
    if no_model {
        debug!("Using NoopClient (no model calls).");
        return Ok(Box::new(NoopClient));
    }

    let key = cfg.openai_api_key.clone().ok_or_else(|| {
        ReleaseNotesError::Configuration("OPENAI_API_KEY (or --api-key) is required".into())
    })?;

    debug!("Using OpenAiClient with model: {}", cfg.model);

    let client = OpenAiClient::new(
        key,
        cfg.model.clone(),
        cfg.api_base_url.clone(),
        cfg.request_timeout,
    )
    .map_err(|e| ReleaseNotesError::Configuration(format!("{e:#}")))?;

    Ok(Box::new(client))
}
