//! # HTTP Server for Coin Generation
//!
//! Provides the generator web UI and the JSON endpoints backing it.
//!
//! ## Usage
//!
//! ```bash
//! escudo serve --listen 0.0.0.0:8080 --assets ./assets --output ./output
//! ```
//!
//! Then open http://localhost:8080 in a browser to mint coins.
//!
//! ## TODO
//!
//! - Add handler tests using axum test utilities

mod handlers;
mod state;

pub use state::ServerConfig;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::EscudoError;
use state::AppState;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use escudo::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), escudo::error::EscudoError> {
/// let config = ServerConfig {
///     assets_dir: "assets".into(),
///     output_dir: "output".into(),
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), EscudoError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/download/:id/:face", get(handlers::download))
        .route("/api/catalog", get(handlers::catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    println!("Escudo HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!("Assets directory: {}", config.assets_dir.display());
    println!("Output directory: {}", config.output_dir.display());
    println!();
    println!(
        "Open http://{}/ in your browser to mint coins",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            EscudoError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| EscudoError::Server(format!("Server error: {e}")))?;

    Ok(())
}
