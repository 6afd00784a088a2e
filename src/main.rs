//! Umzugsplan backend entry point.
//!
//! Loads configuration from the environment, wires the in-memory storage
//! adapter into the application handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use umzugsplan::adapters::http::{household_routes, overlap_routes, HouseholdAppState, OverlapAppState};
use umzugsplan::adapters::storage::InMemoryHouseholdStore;
use umzugsplan::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(
        environment = ?config.server.environment,
        "Starting umzugsplan backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = Arc::new(InMemoryHouseholdStore::new());

    let household_state = HouseholdAppState {
        repository: store.clone(),
        reader: store.clone(),
    };
    let overlap_state = OverlapAppState {
        reader: store,
    };

    let app = Router::new()
        .route("/health", get(health))
        .merge(household_routes(household_state))
        .merge(overlap_routes(overlap_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness probe endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Builds the CORS layer from configured origins.
///
/// Without configured origins any origin is allowed, which is acceptable
/// for local development. Production deployments set
/// `UMZUGSPLAN__SERVER__CORS_ORIGINS` to a comma-separated allow list.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
