use crate::error::{ReleaseNotesError, Result};
use std::fs;
use std::path::Path;

/// Destination for the generated release notes.
pub trait NotesWriter {
    fn write_notes(&self, path: &Path, notes: &str) -> Result<()>;
}

/// Writes notes to the local filesystem, replacing any existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl NotesWriter for FsWriter {
    fn write_notes(&self, path: &Path, notes: &str) -> Result<()> {
        let persistence = |source| ReleaseNotesError::Persistence {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persistence)?;
        }

        fs::write(path, notes).map_err(persistence)?;
        log::debug!("Wrote {} bytes to {}", notes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/notes.md");

        FsWriter.write_notes(&path, "## 2024-01-02\n- fixed").unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        assert_eq!(fs::read_to_string(&path).unwrap(), "## 2024-01-02\n- fixed");
    }

    #[test]
    fn replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "a much longer previous release notes body").unwrap();

        FsWriter.write_notes(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn surfaces_filesystem_failures() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        // A regular file cannot act as a parent directory.
        let err = FsWriter
            .write_notes(&blocker.join("notes.md"), "text")
            .unwrap_err();

        assert!(matches!(err, ReleaseNotesError::Persistence { .. }));
        assert!(err.to_string().contains("notes.md"));
    }
}
