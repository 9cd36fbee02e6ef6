use crate::llm::prompts;

pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn release_notes_prompt(system_prompt: &str, commit_log: &str) -> PromptPair {
    let system = system_prompt.trim().to_owned();

    let user = format!(
        "{lead_in}\n\nCOMMIT MESSAGES:\n\n{log}",
        lead_in = prompts::USER_LEAD_IN,
        log = commit_log.trim_end()
    );

    PromptPair { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_log_in_user_message() {
        let log = "Mon Jan 1 10:00:00 2024 +0000 - Add login\nTue Jan 2 09:00:00 2024 +0000 - Fix typo\n";
        let prompts = release_notes_prompt("  Be brief.\n", log);

        assert_eq!(prompts.system, "Be brief.");
        assert!(prompts.user.starts_with(prompts::USER_LEAD_IN));
        assert!(prompts.user.ends_with(
            "COMMIT MESSAGES:\n\nMon Jan 1 10:00:00 2024 +0000 - Add login\nTue Jan 2 09:00:00 2024 +0000 - Fix typo"
        ));
    }

    #[test]
    fn default_prompt_carries_template() {
        assert!(prompts::DEFAULT_SYSTEM_PROMPT.contains("RELEASE NOTES TEMPLATE"));
    }
}
