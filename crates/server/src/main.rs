// East Store API server
// Decision: In-memory storage when DATABASE_URL is unset, so the server runs without Postgres

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use east_store_core::telemetry::{init_telemetry, TelemetryConfig};
use east_store_server::{
    auth::{AuthConfig, AuthState},
    build_app,
    config::ServerConfig,
    storage::StorageBackend,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real environment variables win
    dotenvy::dotenv().ok();

    let mut telemetry_config = TelemetryConfig::from_env();
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);

    tracing::info!("east-store-server starting...");

    let config = ServerConfig::from_env();

    // Initialize storage
    let db = match &config.database_url {
        Some(url) => {
            let db = StorageBackend::postgres(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");
            db
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
            StorageBackend::in_memory()
        }
    };
    let db = Arc::new(db);

    // Load authentication configuration
    let auth_config = AuthConfig::from_env();
    tracing::info!(
        cookie = %auth_config.cookie_name,
        protected_prefix = %auth_config.protected_prefix,
        login_path = %auth_config.login_path,
        login_enabled = auth_config.login_enabled(),
        "Authentication configured"
    );
    let auth_state = AuthState::new(auth_config);

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    // Only needed when the site is served from a different origin than the API
    let cors_origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    let app = build_app(db, auth_state, &config.api_prefix);

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::ORIGIN,
                    header::CACHE_CONTROL,
                ])
                .allow_credentials(true),
        )
    } else {
        app
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
