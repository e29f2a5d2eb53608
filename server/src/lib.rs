//! Backend for the LEXP lead-generation dashboard.
//!
//!
//!
//! # General Infrastructure
//! - Static marketing frontend talks to this service for everything behind
//!   the dashboard route
//! - Search execution is fully delegated: one external search endpoint per
//!   platform (LinkedIn, Instagram, Facebook, Twitter), configured by URL
//! - Authentication is fully delegated to the identity provider behind
//!   `AUTH_URL`; this service only resolves the caller's session per request
//! - No database of our own: filter state and result sets live in memory,
//!   one workflow per authenticated user
//!
//!
//!
//! # Search Flow
//!
//! **Goal**: never burn a remote search call the user did not explicitly ask
//! for.
//!
//! - Filter edits (`PUT /filters`) only mutate stored criteria, they never
//!   dispatch
//! - `POST /search` is the explicit action: it validates the criteria,
//!   consults the allowance policy, and fires exactly one remote call for
//!   the selected platform
//! - Responses carry a bounded window of 5 profiles; everything past the
//!   window is behind the upgrade gate
//! - Two searches racing resolve last-write-wins: each dispatch takes a
//!   sequence number and stale completions are discarded
//!
//!
//!
//! # Gating
//!
//! Show-more and export always answer with the upsell prompt in the current
//! plan. Opening profile links is platform-dependent: LinkedIn and
//! Instagram open directly, Facebook and Twitter are premium.
//!
//!
//!
//! # Sessions
//!
//! Every dashboard route resolves the bearer token against the identity
//! provider on entry. A missing or invalid session answers 401 with the
//! login redirect; sign-out failures at the provider are logged and
//! swallowed.
//!
//!
//!
//! # Running
//!
//! ```sh
//! LEXP_PORT=1111 RUST_LOG=info cargo run -p lexp-server
//! ```
//!
//! Secrets are file-based: the search key is read from
//! `/run/secrets/SEARCH_API_KEY`.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod gate;
pub mod limit;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;
pub mod workflow;

use config::Config;
use routes::{
    edit_filter_handler, export_handler, filters_handler, limits_handler, open_profile_handler,
    results_handler, search_handler, session_handler, show_more_handler, signout_handler,
};
use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/session", get(session_handler))
        .route("/signout", post(signout_handler))
        .route("/filters", get(filters_handler).put(edit_filter_handler))
        .route("/limits", get(limits_handler))
        .route("/search", post(search_handler))
        .route("/results", get(results_handler))
        .route("/actions/show-more", post(show_more_handler))
        .route("/actions/export", post(export_handler))
        .route("/profiles/open", post(open_profile_handler))
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let state = AppState::new(Config::load());

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let app = router(state.clone()).layer(cors);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
