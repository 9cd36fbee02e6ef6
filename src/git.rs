use crate::error::{ReleaseNotesError, Result};
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// One line per commit: `<author date> - <subject>`.
const LOG_FORMAT: &str = "--pretty=format:%ad - %s";

/// Something that can list the commits of a date window as raw text.
pub trait CommitLogSource {
    fn commit_log(&self, since: &str, until: &str) -> Result<String>;
}

/// Reads commits by shelling out to `git log`.
#[derive(Debug, Clone, Default)]
pub struct GitLog {
    workdir: Option<PathBuf>,
}

impl GitLog {
    /// Run git inside `workdir` instead of the current directory.
    pub fn new(workdir: Option<PathBuf>) -> Self {
        GitLog { workdir }
    }

    fn log_args(since: &str, until: &str) -> Vec<String> {
        vec![
            "log".to_string(),
            format!("--since={since}"),
            format!("--until={until}"),
            LOG_FORMAT.to_string(),
        ]
    }
}

impl CommitLogSource for GitLog {
    fn commit_log(&self, since: &str, until: &str) -> Result<String> {
        let args = GitLog::log_args(since, until);
        git_output(self.workdir.as_ref(), &args)
    }
}

/// Run a git command and capture stdout as String.
fn git_output(workdir: Option<&PathBuf>, args: &[String]) -> Result<String> {
    let command = format!("git {}", args.join(" "));
    log::debug!("Running {command}");

    let mut cmd = GitCommand::new("git");
    cmd.args(args);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| ReleaseNotesError::ExternalTool {
        command: command.clone(),
        diagnostic: format!("could not start git: {e}"),
    })?;

    if !output.status.success() {
        return Err(ReleaseNotesError::ExternalTool {
            command,
            diagnostic: failure_diagnostic(output.status.code(), &output.stderr),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    log::trace!("git log output:\n{stdout}");
    Ok(stdout)
}

/// Git's stderr verbatim, or the exit status when git printed nothing.
fn failure_diagnostic(code: Option<i32>, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    if stderr.is_empty() {
        format!("exited with status {code:?}")
    } else {
        stderr
    }
}
