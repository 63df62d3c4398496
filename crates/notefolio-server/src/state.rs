use std::sync::Arc;

use tokio::sync::Mutex;

use notefolio_core::models::document::Document;
use notefolio_core::models::layout::LayoutSettings;

/// Shared application state, injected into all route handlers via Axum state.
///
/// One document and one set of layout settings per process: the tool
/// serves a single active session, and the mutexes serialize the
/// append/remove/export paths.
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<Mutex<Document>>,
    pub settings: Arc<Mutex<LayoutSettings>>,
    pub http: reqwest::Client,
    pub gemini_api_key: Option<String>,
    pub gemini_endpoint: String,
}

impl AppState {
    pub fn new(gemini_api_key: Option<String>) -> Self {
        Self::with_endpoint(gemini_api_key, notefolio_gemini::client::DEFAULT_ENDPOINT)
    }

    /// Override the upstream endpoint (tests point this at a local server).
    pub fn with_endpoint(gemini_api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            document: Arc::new(Mutex::new(Document::new())),
            settings: Arc::new(Mutex::new(LayoutSettings::default())),
            http: reqwest::Client::new(),
            gemini_api_key,
            gemini_endpoint: endpoint.into(),
        }
    }
}
