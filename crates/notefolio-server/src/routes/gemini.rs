use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// Relay an opaque JSON body to the Gemini API with the server-held key.
///
/// The browser never sees the credential. The upstream status code and
/// JSON body are passed through unchanged; the two 500 error shapes below
/// are the relay's own and part of its contract.
pub async fn relay(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(api_key) = state.gemini_api_key.as_deref() else {
        error!("GEMINI_API_KEY not set in environment");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Gemini API key not set on server." })),
        )
            .into_response();
    };

    let upstream = state
        .http
        .post(&state.gemini_endpoint)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await;

    let response = match upstream {
        Ok(response) => response,
        Err(err) => return proxy_error(err),
    };

    let status = response.status().as_u16();
    let data = match response.json::<Value>().await {
        Ok(data) => data,
        Err(err) => return proxy_error(err),
    };

    if !(200..300).contains(&status) {
        error!(status, "Gemini API error");
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(data)).into_response()
}

fn proxy_error(err: reqwest::Error) -> Response {
    error!(error = %err, "proxy error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Proxy error", "details": err.to_string() })),
    )
        .into_response()
}
