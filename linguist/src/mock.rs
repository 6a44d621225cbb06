//! Mock language model for testing
//!
//! Deterministic and API-free, so the client, the session and the front ends
//! can be exercised without a key or network access.
//!
//! # Example
//!
//! ```ignore
//! use linguist::model::{GenerationRequest, LanguageModel};
//! use linguist::mock::{MockMode, MockModel};
//!
//! #[tokio::test]
//! async fn test_generation() {
//!     let mock = MockModel::new(MockMode::Fixed("Hola".to_string()));
//!     let output = mock.generate(&request).await.unwrap();
//!     assert_eq!(output.text, "Hola");
//! }
//! ```

use crate::error::{ProviderError, ProviderResult};
use crate::model::{GenerationRequest, GroundingChunk, LanguageModel, ModelOutput};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock generation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Always reply with this text and no grounding
    Fixed(String),

    /// Reply with text plus grounding chunks
    Grounded(String, Vec<GroundingChunk>),

    /// Reply with the user prompt unchanged
    Echo,

    /// Simulate a failed API call
    Error(String),
}

/// Mock model that records how it was called
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockModel {
    mode: MockMode,
    /// Simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl MockModel {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockModel with simulated network delay
    ///
    /// ```ignore
    /// let mock = MockModel::with_delay(MockMode::Echo, 50);
    /// // Each call will take ~50ms
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of `generate` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The request of the most recent `generate` call
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn reply(&self, request: &GenerationRequest) -> ProviderResult<ModelOutput> {
        match &self.mode {
            MockMode::Fixed(text) => Ok(ModelOutput {
                text: text.clone(),
                grounding_chunks: None,
            }),
            MockMode::Grounded(text, chunks) => Ok(ModelOutput {
                text: text.clone(),
                grounding_chunks: Some(chunks.clone()),
            }),
            MockMode::Echo => Ok(ModelOutput {
                text: request.user_prompt.clone(),
                grounding_chunks: None,
            }),
            MockMode::Error(msg) => Err(ProviderError::Other(msg.clone())),
        }
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn generate(&self, request: &GenerationRequest) -> ProviderResult<ModelOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        self.reply(request)
    }

    fn provider_name(&self) -> &str {
        "Mock Model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_instruction: "system".to_string(),
            user_prompt: "Target Language: French".to_string(),
            web_search: true,
        }
    }

    #[tokio::test]
    async fn test_fixed_reply() {
        let mock = MockModel::new(MockMode::Fixed("Bonjour".to_string()));
        let output = mock.generate(&request()).await.unwrap();
        assert_eq!(output.text, "Bonjour");
        assert_eq!(output.grounding_chunks, None);
    }

    #[tokio::test]
    async fn test_grounded_reply() {
        let chunks = vec![GroundingChunk::web("https://a.example", None)];
        let mock = MockModel::new(MockMode::Grounded("Hallo".to_string(), chunks.clone()));
        let output = mock.generate(&request()).await.unwrap();
        assert_eq!(output.grounding_chunks, Some(chunks));
    }

    #[tokio::test]
    async fn test_echo_returns_user_prompt() {
        let mock = MockModel::new(MockMode::Echo);
        let output = mock.generate(&request()).await.unwrap();
        assert_eq!(output.text, "Target Language: French");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockModel::new(MockMode::Error("quota exceeded".to_string()));
        match mock.generate(&request()).await {
            Err(ProviderError::Other(msg)) => assert_eq!(msg, "quota exceeded"),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_records_calls_across_clones() {
        let mock = MockModel::new(MockMode::Echo);
        let clone = mock.clone();
        assert_eq!(mock.calls(), 0);
        assert!(mock.last_request().is_none());

        clone.generate(&request()).await.unwrap();
        clone.generate(&request()).await.unwrap();

        assert_eq!(mock.calls(), 2);
        assert_eq!(mock.last_request(), Some(request()));
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockModel::with_delay(MockMode::Echo, 50);
        let start = std::time::Instant::now();
        mock.generate(&request()).await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(MockModel::new(MockMode::Echo).provider_name(), "Mock Model");
    }
}
