/// Bundled system prompt, used when no prompt file is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = include_str!("../../prompts/release_notes.md");

pub const USER_LEAD_IN: &str = "These are the commits for our software, please convert them \
into release notes using the provided template. Consolidate commits from the same day for \
readability's sake.";
