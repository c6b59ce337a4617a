//! Peak & Play Photo Sales Backend
//!
//! A demo REST backend for a passcode-gated photo sales site: clients open
//! a private gallery with a shared passcode, fill a cart, and trigger a
//! mocked checkout. All state is in-memory and lost on restart.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Peak & Play Photo Sales Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.admin_psk.is_none() {
        tracing::warn!(
            "No admin PSK configured (PEAKPLAY_ADMIN_PSK). The admin surface is open (demo mode)!"
        );
    }

    // Initialize the in-memory store
    let galleries = if config.seed_demo {
        store::demo_catalog()
    } else {
        Vec::new()
    };
    tracing::info!("Catalog seeded with {} galleries", galleries.len());
    let repo = Arc::new(Repository::new(galleries));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.admin_psk.clone();

    // Client routes: the passcode *is* the credential here
    let client_routes = Router::new()
        // Access gate
        .route("/access", post(api::open_gallery))
        .route("/sessions/{id}/gallery", get(api::get_session_gallery))
        // Cart
        .route("/sessions/{id}/cart", get(api::get_cart))
        .route("/sessions/{id}/cart/items", post(api::add_cart_item))
        .route(
            "/sessions/{id}/cart/items/{item_id}",
            delete(api::remove_cart_item),
        )
        // Mock checkout
        .route("/sessions/{id}/checkout", post(api::checkout));

    // Admin routes, gated by the PSK middleware
    let admin_routes = Router::new()
        // Catalog
        .route("/catalog", get(api::get_catalog))
        .route("/catalog/revision", get(api::get_revision))
        // Galleries
        .route("/galleries", get(api::list_galleries))
        .route("/galleries", post(api::create_gallery))
        .route("/galleries/{id}", get(api::get_gallery))
        .route("/galleries/{id}", put(api::update_gallery))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", client_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
