//! Documentation of the BFHL backend.
//!
//!
//!
//! # General Infrastructure
//! - Client submits `{"data": [...]}` to `POST /bfhl`
//! - Server classifies the array into numbers and single letters
//! - Server reads one user record from Redis and derives its `user_id`
//! - Both are combined into a single JSON response
//! - `GET /bfhl` is a fixed probe returning `{"operation_code": 1}`
//!
//!
//!
//! # Responses
//!
//! | Status | Body |
//! |--------|------|
//! | 200 | `is_success: true`, `user_id`, `email`, `roll_number`, `numbers`, `alphabets`, `highest_alphabet` |
//! | 400 | `data` missing or not an array |
//! | 404 | No user stored |
//! | 500 | Storage unreachable or a stored record is malformed |
//!
//! Every failure body is `{"is_success": false, "message": "..."}`.
//!
//!
//!
//! # Notes
//!
//! ## State
//! Nothing is shared between requests except the Redis connection manager, which
//! is cloned per lookup. No locks, no caches.
//!
//! ## Storage
//! Users are seeded out of band with the `seed` binary. See [`database`].
//!
//!
//!
//! # Setup
//!
//! Environment.
//! ```sh
//! PORT=8000
//! REDIS_URL=redis://127.0.0.1:6379
//! RUST_LOG=info
//! ```
//!
//! `REDIS_URL` can also be mounted as `/run/secrets/REDIS_URL`.
//!
//! Run.
//! ```sh
//! cargo run --bin bfhl-server
//! ```
//!
//! Try it.
//! ```sh
//! curl -X POST localhost:8000/bfhl -H 'content-type: application/json' -d '{"data": ["A", "1", "z"]}'
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod classify;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{bfhl_handler, probe_handler};
use state::AppState;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await?;

    info!("Starting server...");

    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/bfhl", get(probe_handler).post(bfhl_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
