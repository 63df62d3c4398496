use std::env;

use tracing_subscriber::EnvFilter;

use notefolio_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5174);

    // An absent key fails the relay route at request time, not startup.
    let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    if gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; AI generation is unavailable");
    }

    let state = AppState::new(gemini_api_key);
    let app = notefolio_server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "notefolio server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
