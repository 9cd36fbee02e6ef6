use super::LlmClient;
use anyhow::Result;

/// No-op / dummy model client for development with --no-model.
pub struct NoopClient;

impl LlmClient for NoopClient {
    fn generate_release_notes(&self, _system_prompt: &str, commit_log: &str) -> Result<String> {
        let mut msg = String::new();
        msg.push_str("Dummy release notes for testing\n\n(LLM disabled)\n\n");

        for line in commit_log.lines().filter(|l| !l.trim().is_empty()) {
            msg.push_str(&format!("- {}\n", line.trim()));
        }

        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_each_commit() {
        let notes = NoopClient
            .generate_release_notes("ignored", "d1 - Add login\n\nd2 - Fix typo")
            .unwrap();

        assert!(notes.starts_with("Dummy release notes"));
        assert!(notes.ends_with("- d1 - Add login\n- d2 - Fix typo\n"));
    }
}
