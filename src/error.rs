//! Failure modes of a release-notes run. Every variant aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    /// Missing credential, unreadable prompt file, broken config file.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No commits found between {since} and {until}")]
    NoData { since: String, until: String },

    #[error("`{command}` failed: {diagnostic}")]
    ExternalTool { command: String, diagnostic: String },

    #[error("Release notes generation failed: {0}")]
    Generation(String),

    #[error("Failed to write release notes to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReleaseNotesError {
    /// Process exit status for this failure. Clap already uses 2 for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReleaseNotesError::Configuration(_) => 2,
            ReleaseNotesError::NoData { .. } => 3,
            ReleaseNotesError::ExternalTool { .. } => 4,
            ReleaseNotesError::Generation(_) => 5,
            ReleaseNotesError::Persistence { .. } => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReleaseNotesError>;
