use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "releasebot",
    version,
    about = "LLM-assisted release notes generator for a range of git commits"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Starting date of the commit range (anything `git log --since` accepts, e.g. 2024-01-31)
    #[arg(long, value_name = "DATE", value_parser = NonEmptyStringValueParser::new())]
    pub since: String,

    /// Ending date of the commit range (anything `git log --until` accepts)
    #[arg(long, value_name = "DATE", value_parser = NonEmptyStringValueParser::new())]
    pub until: String,

    /// File path to write the release notes to; parent directories are created
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Model name to use (e.g. gpt-4o-mini)
    #[arg(long)]
    pub model: Option<String>,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub api_base_url: Option<String>,

    /// File holding the system prompt that shapes the release notes
    #[arg(long, value_name = "PATH")]
    pub prompt_file: Option<PathBuf>,

    /// Repository to read commits from (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Disable model calls; write dummy release notes instead
    #[arg(long)]
    pub no_model: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
