//! Error types for the translation pipeline
//!
//! [`ProviderError`] carries the full diagnostic detail of a failed model call.
//! [`TranslateError`] is the only thing the client hands back to a UI.

use thiserror::Error;

/// The fixed message shown to users when a translation fails.
pub const TRANSLATION_FAILED_MESSAGE: &str = "Failed to translate text. Please try again.";

/// Failures raised by a [`LanguageModel`](crate::model::LanguageModel) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No API key was configured in the environment
    #[error("API key is not configured (set API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,
    /// The service rejected the credentials (HTTP 401/403)
    #[error("API rejected credentials ({status}): {body}")]
    Unauthorized { status: u16, body: String },
    /// Any other non-success HTTP status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    /// Connection, timeout or other transport-level failure
    #[error("Network error: {0}")]
    Network(String),
    /// The reply could not be decoded
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
    /// Simulated or otherwise uncategorised failure
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Result type for model calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// The error a [`TranslationClient`](crate::client::TranslationClient) reports
///
/// The underlying cause is logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Failed to translate text. Please try again.")]
    TranslationFailed,
}

impl TranslateError {
    /// Message suitable for display in a UI
    pub fn user_message(&self) -> &'static str {
        match self {
            TranslateError::TranslationFailed => TRANSLATION_FAILED_MESSAGE,
        }
    }
}

/// Reasons a [`TranslationRequest`](crate::types::TranslationRequest) cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// Text is empty after trimming. Front ends treat this as a silent no-op.
    #[error("nothing to translate")]
    EmptyText,
    #[error("unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_failed_display_is_fixed() {
        let err = TranslateError::TranslationFailed;
        assert_eq!(err.to_string(), "Failed to translate text. Please try again.");
        assert_eq!(err.user_message(), TRANSLATION_FAILED_MESSAGE);
    }

    #[test]
    fn test_provider_error_messages_carry_detail() {
        let err = ProviderError::Api {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): overloaded");

        let err = ProviderError::Unauthorized {
            status: 401,
            body: "bad key".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(ProviderError::MissingApiKey.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_invalid_request_messages() {
        assert_eq!(
            InvalidRequest::UnsupportedLanguage("Klingon".to_string()).to_string(),
            "unsupported target language: Klingon"
        );
    }
}
