//! Translation client: one request in, one typed result out
//!
//! # Example
//!
//! ```ignore
//! use linguist::{GeminiProvider, TranslationClient, TranslationMode, TranslationRequest};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TranslationClient::new(Arc::new(GeminiProvider::from_env()?));
//!     let request = TranslationRequest::new("Good morning!", "Spanish", TranslationMode::Formal)?;
//!     let result = client.translate(&request).await?;
//!     println!("{}", result.translated_text);
//!     Ok(())
//! }
//! ```

use crate::error::TranslateError;
use crate::model::{GenerationRequest, LanguageModel};
use crate::prompt::Prompt;
use crate::response::parse_model_output;
use crate::types::{TranslationRequest, TranslationResult};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct TranslationClient {
    model: Arc<dyn LanguageModel>,
}

impl TranslationClient {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub fn provider_name(&self) -> &str {
        self.model.provider_name()
    }

    /// Translate `request` with a single, web-search enabled model call
    ///
    /// Any failure is logged with its cause and reported as
    /// [`TranslateError::TranslationFailed`]. Nothing is retried.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let prompt = Prompt::for_request(request);
        let generation = GenerationRequest {
            system_instruction: prompt.system_instruction,
            user_prompt: prompt.user_prompt,
            web_search: true,
        };

        debug!(
            provider = self.model.provider_name(),
            target_language = request.target_language(),
            mode = request.mode().name(),
            "Translating"
        );

        match self.model.generate(&generation).await {
            Ok(output) => Ok(parse_model_output(&output)),
            Err(cause) => {
                error!(
                    provider = self.model.provider_name(),
                    error = %cause,
                    "Translation error"
                );
                Err(TranslateError::TranslationFailed)
            }
        }
    }
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient")
            .field("provider", &self.model.provider_name())
            .finish()
    }
}
