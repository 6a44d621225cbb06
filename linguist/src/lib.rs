//! Tone-aware translation through a web-search grounded language model
//!
//! The pipeline is a single round trip:
//!
//! 1. **Session** - holds the input text, target language and tone, and the
//!    Idle / Loading / Success / Failed state shown to the user
//! 2. **Prompt builder** - fixed system instruction plus a per-request user prompt
//! 3. **Translation client** - one call to the model with Google Search
//!    grounding enabled, parsed into translation, cultural notes and citations
//!
//! # Example
//!
//! ```ignore
//! use linguist::{GeminiProvider, Session, TranslationClient, translate_with};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TranslationClient::new(Arc::new(GeminiProvider::from_env()?));
//!
//!     let mut session = Session::new();
//!     session.set_text("Good morning!");
//!     session.set_target_language("Japanese")?;
//!     translate_with(&mut session, &client).await;
//!
//!     println!("{:?}", session.state());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod languages;
pub mod mock;
pub mod model;
pub mod prompt;
pub mod response;
pub mod session;
pub mod types;


// Re-export main types for convenient access
pub use client::TranslationClient;
pub use config::Config;
pub use error::{InvalidRequest, ProviderError, TRANSLATION_FAILED_MESSAGE, TranslateError};
pub use gemini::GeminiProvider;
pub use languages::{DEFAULT_TARGET_LANGUAGE, LANGUAGES};
pub use mock::{MockMode, MockModel};
pub use model::{GenerationRequest, GroundingChunk, LanguageModel, ModelOutput, WebSource};
pub use session::{Session, SessionSnapshot, SessionState, Ticket, translate_with};
pub use types::{GroundingLink, TranslationMode, TranslationRequest, TranslationResult};
