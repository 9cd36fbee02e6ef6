mod cli_args;
mod config;
mod error;
mod git;
mod llm;
mod logging;
mod pipeline;
mod setup;
mod writer;

use clap::Parser;
use std::process::ExitCode;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::git::GitLog;
use crate::pipeline::{Pipeline, RunRequest};
use crate::writer::FsWriter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Credential and prompt are checked before git or the API is touched.
    let cfg = Config::from_sources(&cli)?;
    let llm = setup::build_llm_client(&cfg, cli.no_model)?;
    let log_source = GitLog::new(cli.repo);

    let pipeline = Pipeline {
        log_source: &log_source,
        llm: llm.as_ref(),
        writer: &FsWriter,
    };

    pipeline.run(&RunRequest {
        since: cli.since,
        until: cli.until,
        output: cli.output,
        system_prompt: cfg.system_prompt,
    })
}
