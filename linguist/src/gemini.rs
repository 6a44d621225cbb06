//! Google Gemini provider
//!
//! Calls the `generateContent` endpoint with the Google Search tool enabled
//! and maps the reply onto [`ModelOutput`].
//!
//! # Authentication
//!
//! The key comes from `API_KEY` (or `GEMINI_API_KEY`), see [`Config`]. A
//! provider without a key can still be built; its first call fails with
//! [`ProviderError::MissingApiKey`]. The key is only ever sent in the
//! `x-goog-api-key` header to the configured endpoint.

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::model::{GenerationRequest, GroundingChunk, LanguageModel, ModelOutput};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gemini `generateContent` provider
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiProvider {
    /// Create a provider from explicit settings
    ///
    /// Only fails if the HTTP client cannot be built.
    pub fn new(config: Config) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            model: config.model,
            api_base: config.api_base,
        })
    }

    /// Create a provider from [`Config::from_env`]
    pub fn from_env() -> ProviderResult<Self> {
        Self::new(Config::from_env())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }

    fn build_body(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some(request.system_instruction.clone()),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.user_prompt.clone()),
                }],
            }],
            tools: request.web_search.then(|| {
                vec![GeminiTool {
                    google_search: GoogleSearch {},
                }]
            }),
        }
    }

    fn into_output(response: GeminiResponse) -> ModelOutput {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return ModelOutput::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        ModelOutput {
            text,
            grounding_chunks: candidate
                .grounding_metadata
                .and_then(|metadata| metadata.grounding_chunks),
        }
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[async_trait]
impl LanguageModel for GeminiProvider {
    async fn generate(&self, request: &GenerationRequest) -> ProviderResult<ModelOutput> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        debug!(
            model = %self.model,
            web_search = request.web_search,
            prompt_chars = request.user_prompt.chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized {
                    status: status.as_u16(),
                    body,
                },
                _ => ProviderError::Api {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let response: GeminiResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        Ok(Self::into_output(response))
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<GeminiTool>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Non-text parts (function calls, inline data) decode with `text: None`
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    grounding_metadata: Option<GeminiGroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Option<Vec<GroundingChunk>>,
}
