//! Prompt construction
//!
//! Every call sends the same [`SYSTEM_INSTRUCTION`] plus a user prompt built
//! from the request. The user prompt uses labeled lines followed by the quoted
//! source text, so identical requests always yield identical prompts.

use crate::types::TranslationRequest;

/// Fixed behavioral contract sent as the system instruction on every call
///
/// The output-format section is what the response parser relies on: cultural
/// notes come after a `---` separator.
pub const SYSTEM_INSTRUCTION: &str = r#"# Role:
Universal Expert Linguistic Translator

# Objective:
Translate any input text into the target language with 100% accuracy, maintaining original sentiment, context, and intent.

# Translation Modes:
1. Formal Mode (Fusha/Standard): Modern Standard versions, strict grammar, academic vocabulary.
2. Informal Mode (Slang/Colloquial): Spoken dialect, idioms, slang. For Arabic without dialect specified, use "White Dialect".

# Instructions:
- Auto-detect source language.
- Culturally adapt idioms (don't translate literally).
- Maintain speaker's tone.
- Handle nuances based on context.
- If a dialect is specified, use that regional variety of the target language.
- Use Google Search tool if the content involves recent events, names of specific people, or trending topics to ensure accuracy.

# Output Format:
Return your response in a clear format. If there are cultural notes, put them at the end after a separator "---".
"#;

/// The two strings sent to the model for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
}

impl Prompt {
    pub fn for_request(request: &TranslationRequest) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_prompt: build_user_prompt(request),
        }
    }
}

/// Build the per-call user prompt
///
/// # Example
///
/// ```
/// use linguist::{TranslationMode, TranslationRequest, prompt::build_user_prompt};
///
/// let request = TranslationRequest::new("Good morning!", "Spanish", TranslationMode::Formal)?;
/// let prompt = build_user_prompt(&request);
/// assert!(prompt.contains("Target Language: Spanish"));
/// assert!(prompt.contains("\"Good morning!\""));
/// # Ok::<(), linguist::InvalidRequest>(())
/// ```
pub fn build_user_prompt(request: &TranslationRequest) -> String {
    let mut prompt = format!(
        "Target Language: {}\nTranslation Mode: {}\n",
        request.target_language(),
        request.mode().label()
    );
    if let Some(dialect) = request.dialect() {
        prompt.push_str(&format!("Dialect: {}\n", dialect));
    }
    prompt.push_str(&format!("Text to translate:\n\"{}\"\n", request.text()));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::LANGUAGES;
    use crate::types::TranslationMode;

    fn request(text: &str, language: &str, mode: TranslationMode) -> TranslationRequest {
        TranslationRequest::new(text, language, mode).unwrap()
    }

    #[test]
    fn test_user_prompt_layout() {
        let prompt = build_user_prompt(&request(
            "Good morning!",
            "Spanish",
            TranslationMode::Formal,
        ));
        assert_eq!(
            prompt,
            "Target Language: Spanish\n\
             Translation Mode: Formal (Fusha/Standard)\n\
             Text to translate:\n\
             \"Good morning!\"\n"
        );
    }

    #[test]
    fn test_user_prompt_contains_inputs_for_every_language_and_mode() {
        let texts = ["Hello", "  padded  ", "multi\nline", "quotes \"inside\"", "日本語"];
        for language in LANGUAGES {
            for mode in [TranslationMode::Formal, TranslationMode::Informal] {
                for text in texts {
                    let prompt = build_user_prompt(&request(text, language, mode));
                    assert!(prompt.contains(language));
                    assert!(prompt.contains(mode.label()));
                    assert!(prompt.contains(text));
                }
            }
        }
    }

    #[test]
    fn test_user_prompt_with_dialect() {
        let req = request("How are you?", "Arabic", TranslationMode::Informal)
            .with_dialect(Some("Egyptian"));
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("Translation Mode: Informal (Slang/Colloquial)\nDialect: Egyptian\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request("Bonjour", "German", TranslationMode::Informal);
        assert_eq!(Prompt::for_request(&req), Prompt::for_request(&req));
    }

    #[test]
    fn test_system_instruction_declares_separator() {
        assert!(SYSTEM_INSTRUCTION.contains("\"---\""));
        assert!(SYSTEM_INSTRUCTION.contains("Formal Mode (Fusha/Standard)"));
        assert!(SYSTEM_INSTRUCTION.contains("Informal Mode (Slang/Colloquial)"));
        assert!(SYSTEM_INSTRUCTION.contains("White Dialect"));
    }
}
