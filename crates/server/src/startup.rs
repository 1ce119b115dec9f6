use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve once signalled with Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Connect, migrate and bootstrap, returning the state the router runs on.
pub async fn prepare(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    if let Some(key) = &cfg.auth.bootstrap_token {
        service::auth::service::ensure_bootstrap_token(&db, key, &cfg.auth.bootstrap_user).await?;
    }
    Ok(ServerState::new(db))
}

pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load()?;
    let state = prepare(&cfg).await?;

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "circuit registry listening");
    serve(listener, app(state)).await
}
