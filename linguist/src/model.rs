//! Language model trait and the provider-neutral request/reply shapes
//!
//! The translation client only talks to [`LanguageModel`], which lets the real
//! Gemini binding and the deterministic mock be swapped freely.
//!
//! # Example
//!
//! ```ignore
//! use linguist::model::{GenerationRequest, LanguageModel};
//! use linguist::GeminiProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::from_env()?;
//!     let output = provider
//!         .generate(&GenerationRequest {
//!             system_instruction: "Answer briefly.".to_string(),
//!             user_prompt: "Capital of France?".to_string(),
//!             web_search: true,
//!         })
//!         .await?;
//!     println!("{}", output.text);
//!     Ok(())
//! }
//! ```

use crate::error::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything a provider needs for one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    /// Enable the provider's web-search augmentation tool
    pub web_search: bool,
}

/// Web page a grounding chunk points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One source the model reports having used
///
/// Only web chunks are understood; other kinds deserialize with `web: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

impl GroundingChunk {
    pub fn web(uri: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            web: Some(WebSource {
                uri: uri.into(),
                title: title.map(str::to_string),
            }),
        }
    }
}

/// Raw reply of a single generation call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOutput {
    pub text: String,
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// Generic trait for text generation backends
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Perform exactly one generation call
    ///
    /// Implementations never retry; the first failure is returned as is.
    async fn generate(&self, request: &GenerationRequest) -> ProviderResult<ModelOutput>;

    /// Name used in logs, e.g. "Gemini"
    fn provider_name(&self) -> &str;
}
