use crate::error::{ReleaseNotesError, Result};
use crate::git::CommitLogSource;
use crate::llm::LlmClient;
use crate::writer::NotesWriter;
use std::path::PathBuf;

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub since: String,
    pub until: String,
    pub output: PathBuf,
    pub system_prompt: String,
}

/// Collect commits, summarize them, persist the notes.
pub struct Pipeline<'a> {
    pub log_source: &'a dyn CommitLogSource,
    pub llm: &'a dyn LlmClient,
    pub writer: &'a dyn NotesWriter,
}

impl Pipeline<'_> {
    pub fn run(&self, req: &RunRequest) -> Result<()> {
        println!("Fetching commit logs from {} to {}...", req.since, req.until);
        let commit_log = self.log_source.commit_log(&req.since, &req.until)?;

        if commit_log.trim().is_empty() {
            return Err(ReleaseNotesError::NoData {
                since: req.since.clone(),
                until: req.until.clone(),
            });
        }
        log::info!("Collected {} commits", commit_log.lines().count());

        println!("Generating release notes...");
        let notes = self
            .llm
            .generate_release_notes(&req.system_prompt, &commit_log)
            .map_err(|e| ReleaseNotesError::Generation(format!("{e:#}")))?;

        self.writer.write_notes(&req.output, &notes)?;
        println!("Release notes saved to {}", req.output.display());

        Ok(())
    }
}
