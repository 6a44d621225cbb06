use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use linguist::{
    DEFAULT_TARGET_LANGUAGE, GeminiProvider, LANGUAGES, Session, SessionSnapshot,
    TRANSLATION_FAILED_MESSAGE, TranslationClient, TranslationMode,
};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    #[serde(default)]
    pub mode: TranslationMode,
    #[serde(default)]
    pub dialect: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub languages: &'static [&'static str],
    pub default_language: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The page's single UI state holder plus the client that feeds it
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub client: TranslationClient,
}

impl AppState {
    pub fn new(client: TranslationClient) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            client,
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // A missing API key is reported by the first translation, not here
    let provider = GeminiProvider::from_env()
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    info!(model = provider.model(), "Using Gemini provider");
    let state = AppState::new(TranslationClient::new(Arc::new(provider)));

    info!("Starting Linguist web server");

    let addr = std::env::var("LINGUIST_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/languages", get(list_languages))
        .route("/api/state", get(current_state))
        .route("/api/translate", post(translate))
        .route("/api/clear", post(clear))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: LANGUAGES,
        default_language: DEFAULT_TARGET_LANGUAGE,
    })
}

async fn current_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session().snapshot())
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<SessionSnapshot>, (StatusCode, Json<ErrorResponse>)> {
    let ticket = {
        let mut session = state.session();
        if session.state().is_loading() {
            info!("Translation already in flight, ignoring submission");
            return Ok(Json(session.snapshot()));
        }

        session
            .set_target_language(&request.target_language)
            .map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
            })?;
        session.set_mode(request.mode);
        session.set_dialect(request.dialect.as_deref());
        session.set_text(request.text);

        match session.submit() {
            Some(ticket) => ticket,
            None => return Ok(Json(session.snapshot())),
        }
    };

    info!(
        "Translating to {} ({})",
        ticket.request().target_language(),
        ticket.request().mode().name()
    );

    // Detached so a client disconnect cannot leave the session in Loading.
    // The lock is not held across the model call.
    let worker = state.clone();
    let resolution = tokio::spawn(async move {
        let outcome = worker.client.translate(ticket.request()).await;
        let mut session = worker.session();
        session.resolve(ticket, outcome);
        session.snapshot()
    });

    resolution.await.map(Json).map_err(|e| {
        error!(error = %e, "Translation task failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: TRANSLATION_FAILED_MESSAGE.to_string(),
            }),
        )
    })
}

async fn clear(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session();
    session.clear();
    Json(session.snapshot())
}
