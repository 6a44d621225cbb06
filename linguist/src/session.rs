//! UI state holder
//!
//! A [`Session`] owns what a translation screen shows: the input text, the
//! selected language and tone, and exactly one of the four [`SessionState`]s.
//!
//! Submissions hand out a [`Ticket`] stamped with a generation number. Only
//! the ticket matching the current `Loading` generation may resolve the
//! session, so a reply that arrives after `clear()` (or any other superseding
//! action) is dropped instead of overwriting newer state.
//!
//! ```ignore
//! let mut session = Session::new();
//! session.set_text("Good morning!");
//! if let Some(ticket) = session.submit() {
//!     let outcome = client.translate(ticket.request()).await;
//!     session.resolve(ticket, outcome);
//! }
//! ```

use crate::client::TranslationClient;
use crate::error::{InvalidRequest, TranslateError};
use crate::languages::{self, DEFAULT_TARGET_LANGUAGE};
use crate::types::{TranslationMode, TranslationRequest, TranslationResult};
use serde::Serialize;
use tracing::{debug, warn};

/// What the result pane currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    /// A request is in flight; only a ticket of this generation may resolve it
    Loading { generation: u64 },
    Success(TranslationResult),
    /// Holds the user-facing message
    Failed(String),
}

impl SessionState {
    pub fn status(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Loading { .. } => "loading",
            SessionState::Success(_) => "success",
            SessionState::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading { .. })
    }
}

/// Proof of a submission, carried through the async call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    request: TranslationRequest,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &TranslationRequest {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    text: String,
    target_language: String,
    mode: TranslationMode,
    dialect: Option<String>,
    state: SessionState,
    last_generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            text: String::new(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            mode: TranslationMode::default(),
            dialect: None,
            state: SessionState::Idle,
            last_generation: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
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

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Select a catalog language. The current result stays on screen.
    pub fn set_target_language(&mut self, language: &str) -> Result<(), InvalidRequest> {
        if !languages::is_supported(language) {
            return Err(InvalidRequest::UnsupportedLanguage(language.to_string()));
        }
        self.target_language = language.to_string();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: TranslationMode) {
        self.mode = mode;
    }

    pub fn set_dialect(&mut self, dialect: Option<&str>) {
        self.dialect = dialect
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
    }

    /// Start a translation of the current inputs
    ///
    /// Returns `None` without touching anything when a request is already in
    /// flight or the text is blank.
    pub fn submit(&mut self) -> Option<Ticket> {
        if self.state.is_loading() {
            debug!("Submission ignored: translation already in flight");
            return None;
        }

        let request = match TranslationRequest::new(
            self.text.clone(),
            self.target_language.clone(),
            self.mode,
        ) {
            Ok(request) => request.with_dialect(self.dialect.as_deref()),
            Err(reason) => {
                debug!(%reason, "Submission skipped");
                return None;
            }
        };

        self.last_generation += 1;
        self.state = SessionState::Loading {
            generation: self.last_generation,
        };

        Some(Ticket {
            generation: self.last_generation,
            request,
        })
    }

    /// Apply the outcome of a submission
    ///
    /// Returns `false` and leaves the session untouched when the ticket has
    /// been superseded.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<TranslationResult, TranslateError>,
    ) -> bool {
        match self.state {
            SessionState::Loading { generation } if generation == ticket.generation => {}
            _ => {
                warn!(
                    generation = ticket.generation,
                    "Discarding stale translation result"
                );
                return false;
            }
        }

        self.state = match outcome {
            Ok(result) => SessionState::Success(result),
            Err(err) => SessionState::Failed(err.user_message().to_string()),
        };
        true
    }

    /// Reset text, result and error. Any in-flight reply will be discarded.
    pub fn clear(&mut self) {
        self.text.clear();
        self.last_generation += 1;
        self.state = SessionState::Idle;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (result, error) = match &self.state {
            SessionState::Success(result) => (Some(result.clone()), None),
            SessionState::Failed(message) => (None, Some(message.clone())),
            SessionState::Idle | SessionState::Loading { .. } => (None, None),
        };

        SessionSnapshot {
            text: self.text.clone(),
            target_language: self.target_language.clone(),
            mode: self.mode,
            dialect: self.dialect.clone(),
            status: self.state.status(),
            result,
            error,
        }
    }
}

/// Serializable view of a [`Session`] for front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub text: String,
    pub target_language: String,
    pub mode: TranslationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TranslationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Submit, await the client and resolve, for front ends that own the session
/// exclusively
///
/// Returns whether a translation was actually run.
pub async fn translate_with(session: &mut Session, client: &TranslationClient) -> bool {
    let Some(ticket) = session.submit() else {
        return false;
    };
    let outcome = client.translate(ticket.request()).await;
    session.resolve(ticket, outcome)
}
