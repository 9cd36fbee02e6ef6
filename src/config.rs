use crate::cli_args::Cli;
use crate::error::{ReleaseNotesError, Result};
use crate::llm::DEFAULT_SYSTEM_PROMPT;
use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";
const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";

/// Final resolved configuration for releasebot.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` only when model calls are disabled.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
    pub system_prompt: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`, `--api-base-url`, `--prompt-file`)
    ///   2. Env vars `RELEASEBOT_MODEL`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `RELEASEBOT_PROMPT_FILE`
    ///   3. TOML `~/.config/releasebot.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = match config_path() {
            Some(path) => load_file_config(&path)
                .map_err(|e| ReleaseNotesError::Configuration(format!("{e:#}")))?,
            None => FileConfig::default(),
        };

        Config::resolve(cli, file_cfg, |key| env::var(key).ok())
    }

    fn resolve(
        cli: &Cli,
        file_cfg: FileConfig,
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        // clap already folds OPENAI_API_KEY / OPENAI_BASE_URL into these two.
        let openai_api_key = cli
            .api_key
            .clone()
            .or_else(|| env_var("OPENAI_API_KEY"))
            .or(file_cfg.openai_api_key)
            .filter(|k| !k.trim().is_empty());

        if openai_api_key.is_none() && !cli.no_model {
            return Err(ReleaseNotesError::Configuration(
                "Please set the OPENAI_API_KEY environment variable (or pass --api-key)".into(),
            ));
        }

        let model = cli
            .model
            .clone()
            .or_else(|| env_var("RELEASEBOT_MODEL"))
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base_url = cli
            .api_base_url
            .clone()
            .or_else(|| env_var("OPENAI_BASE_URL"))
            .or(file_cfg.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let prompt_file = cli
            .prompt_file
            .clone()
            .or_else(|| env_var("RELEASEBOT_PROMPT_FILE").map(PathBuf::from))
            .or(file_cfg.prompt_file);

        let system_prompt = match prompt_file {
            Some(path) => load_prompt_file(&path)?,
            None => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        let request_timeout = file_cfg
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Config {
            openai_api_key,
            model,
            api_base_url,
            request_timeout,
            system_prompt,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub prompt_file: Option<PathBuf>,
    /// Seconds to wait for the API; unset or 0 waits forever.
    pub request_timeout_secs: Option<u64>,
}

/// Return `~/.config/releasebot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("releasebot.toml"))
}

fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let mut cfg = toml::from_str::<FileConfig>(&data)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    // Relative prompt paths are relative to the config file, not the cwd.
    if let Some(dir) = path.parent() {
        cfg.prompt_file = cfg.prompt_file.map(|prompt| dir.join(prompt));
    }

    log::debug!("Loaded config file {}", path.display());
    Ok(cfg)
}

fn load_prompt_file(path: &Path) -> Result<String> {
    let prompt = fs::read_to_string(path).map_err(|e| {
        ReleaseNotesError::Configuration(format!(
            "failed to read prompt file {}: {e}",
            path.display()
        ))
    })?;

    if prompt.trim().is_empty() {
        return Err(ReleaseNotesError::Configuration(format!(
            "prompt file {} is empty",
            path.display()
        )));
    }

    log::debug!("Using system prompt from {}", path.display());
    Ok(prompt)
}
