//! Value types exchanged between the front ends and the translation client

use crate::error::InvalidRequest;
use crate::languages;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Register the model should translate into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Standard language: strict grammar, academic vocabulary
    #[default]
    Formal,
    /// Spoken dialect: idioms, slang
    Informal,
}

impl TranslationMode {
    /// Label embedded in the user prompt
    pub fn label(&self) -> &'static str {
        match self {
            TranslationMode::Formal => "Formal (Fusha/Standard)",
            TranslationMode::Informal => "Informal (Slang/Colloquial)",
        }
    }

    /// Short name for UI headings
    pub fn name(&self) -> &'static str {
        match self {
            TranslationMode::Formal => "Formal",
            TranslationMode::Informal => "Informal",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TranslationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(TranslationMode::Formal),
            "informal" => Ok(TranslationMode::Informal),
            other => Err(format!("unknown translation mode: {}", other)),
        }
    }
}

/// One translation job, built fresh per user action
///
/// Fields are private so a request can't change after it has been handed to
/// the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    target_language: String,
    mode: TranslationMode,
    dialect: Option<String>,
}

impl TranslationRequest {
    /// Build a request, rejecting blank text and languages outside the catalog
    ///
    /// The text is kept exactly as typed; only the emptiness check trims it.
    pub fn new(
        text: impl Into<String>,
        target_language: impl Into<String>,
        mode: TranslationMode,
    ) -> Result<Self, InvalidRequest> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidRequest::EmptyText);
        }

        let target_language = target_language.into();
        if !languages::is_supported(&target_language) {
            return Err(InvalidRequest::UnsupportedLanguage(target_language));
        }

        Ok(Self {
            text,
            target_language,
            mode,
            dialect: None,
        })
    }

    /// Attach a regional dialect hint, e.g. "Egyptian" for Arabic
    ///
    /// Blank values are ignored.
    pub fn with_dialect(mut self, dialect: Option<&str>) -> Self {
        self.dialect = dialect
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }
}

/// A citation the model attached after consulting web search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    pub uri: String,
    pub title: String,
}

/// Parsed model reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    /// Cultural notes found after the `---` separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `None` when the model cited nothing; never `Some(vec![])`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_links: Option<Vec<GroundingLink>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(TranslationMode::Formal.label(), "Formal (Fusha/Standard)");
        assert_eq!(
            TranslationMode::Informal.label(),
            "Informal (Slang/Colloquial)"
        );
        assert_eq!(TranslationMode::default(), TranslationMode::Formal);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("formal".parse::<TranslationMode>(), Ok(TranslationMode::Formal));
        assert_eq!(" Informal ".parse::<TranslationMode>(), Ok(TranslationMode::Informal));
        assert!("casual".parse::<TranslationMode>().is_err());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&TranslationMode::Informal).unwrap();
        assert_eq!(json, "\"informal\"");
        let mode: TranslationMode = serde_json::from_str("\"formal\"").unwrap();
        assert_eq!(mode, TranslationMode::Formal);
    }

    #[test]
    fn test_request_rejects_blank_text() {
        for text in ["", "   ", "\n\t "] {
            assert_eq!(
                TranslationRequest::new(text, "Spanish", TranslationMode::Formal),
                Err(InvalidRequest::EmptyText)
            );
        }
    }

    #[test]
    fn test_request_rejects_unknown_language() {
        let result = TranslationRequest::new("hello", "Elvish", TranslationMode::Formal);
        assert_eq!(
            result,
            Err(InvalidRequest::UnsupportedLanguage("Elvish".to_string()))
        );
    }

    #[test]
    fn test_request_keeps_text_verbatim() {
        let request =
            TranslationRequest::new("  Good morning!  ", "Spanish", TranslationMode::Formal)
                .unwrap();
        assert_eq!(request.text(), "  Good morning!  ");
        assert_eq!(request.target_language(), "Spanish");
        assert_eq!(request.mode(), TranslationMode::Formal);
        assert_eq!(request.dialect(), None);
    }

    #[test]
    fn test_request_dialect() {
        let request = TranslationRequest::new("hi", "Arabic", TranslationMode::Informal)
            .unwrap()
            .with_dialect(Some(" Egyptian "));
        assert_eq!(request.dialect(), Some("Egyptian"));

        let request = TranslationRequest::new("hi", "Arabic", TranslationMode::Informal)
            .unwrap()
            .with_dialect(Some("  "));
        assert_eq!(request.dialect(), None);
    }

    #[test]
    fn test_result_json_is_camel_case_and_omits_absent_fields() {
        let result = TranslationResult {
            translated_text: "Hola".to_string(),
            notes: None,
            grounding_links: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "translatedText": "Hola" }));

        let result = TranslationResult {
            translated_text: "Hola".to_string(),
            notes: Some("greeting".to_string()),
            grounding_links: Some(vec![GroundingLink {
                uri: "https://example.com".to_string(),
                title: "Example".to_string(),
            }]),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["notes"], "greeting");
        assert_eq!(json["groundingLinks"][0]["uri"], "https://example.com");
    }
}
