use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}:{} ({e})", server.host, server.port)))
}

/// Build the router for a given configuration without binding.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::from_storage(&cfg.storage);
    routes::build_router(build_cors(), state)
}

/// Public entry: prepare the data directory and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    runtime::ensure_env(&cfg.storage.data_dir, &cfg.storage.report_path)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let app = build_app(&cfg);
    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, data_dir = %cfg.storage.data_dir, report = %cfg.storage.report_path, "starting vet records server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut server = ServerConfig::default();
        assert!(load_bind_addr(&server).is_ok());
        server.host = "not a host".into();
        assert!(matches!(load_bind_addr(&server), Err(StartupError::InvalidConfig(_))));
    }
}
