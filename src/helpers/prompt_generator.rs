use crate::prompts::analysis_prompt::{ANALYSIS_PROMPT, TEXT_PLACEHOLDER};

/// Text is inserted verbatim: no escaping, no length cap.
pub fn generate_analysis_prompt(text: &str) -> String {
    ANALYSIS_PROMPT.replacen(TEXT_PLACEHOLDER, text, 1)
}
