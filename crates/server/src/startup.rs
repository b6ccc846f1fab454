use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, auth};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Connect, migrate and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_and_migrate(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = auth::ServerState::new(
        db,
        auth::ServerAuthConfig {
            jwt_secret: cfg.auth.jwt_secret.clone(),
            policy: cfg.auth.policy,
        },
    );
    Ok(routes::build_router(state, build_cors()))
}

/// Build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg)?;
    let app = build_app(&cfg).await?;

    info!(%addr, policy = ?cfg.auth.policy, "starting branch registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
