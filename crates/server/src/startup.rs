use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::context::FixedUserContext;
use service::store::SeaOrmContext;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Validated configuration plus the reason the config file was skipped, if
/// it was. Loading runs before logging is up, so the caller reports it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub file_error: Option<String>,
}

/// Configuration from `config.toml` (or `CONFIG_PATH`), falling back to
/// environment variables when no file can be read.
pub fn load_config() -> Result<LoadedConfig, StartupError> {
    resolve_config(configs::load_default(), AppConfig::from_env)
}

fn resolve_config(
    file: anyhow::Result<AppConfig>,
    from_env: impl FnOnce() -> AppConfig,
) -> Result<LoadedConfig, StartupError> {
    let (mut config, file_error) = match file {
        Ok(cfg) => (cfg, None),
        Err(e) => (from_env(), Some(e.to_string())),
    };
    config.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(LoadedConfig { config, file_error })
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Pick the entity store named by `[storage] backend`.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(user_id = cfg.context.user_id, "using in-memory store");
            Ok(AppState::in_memory(cfg.context.user_id))
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            let store = Arc::new(SeaOrmContext::new(db));
            Ok(AppState::new(store, Arc::new(FixedUserContext::new(cfg.context.user_id))))
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env("frontend").await;

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        cfg
    }

    #[test]
    fn missing_file_falls_back_and_keeps_reason() {
        let loaded = resolve_config(Err(anyhow::anyhow!("config.toml: not found")), memory_config).unwrap();
        assert_eq!(loaded.config.storage.backend, StorageBackend::Memory);
        assert_eq!(loaded.file_error.as_deref(), Some("config.toml: not found"));
    }

    #[test]
    fn readable_file_reports_no_fallback() {
        let loaded = resolve_config(Ok(memory_config()), || panic!("environment should not be read")).unwrap();
        assert!(loaded.file_error.is_none());
        assert_eq!(loaded.config.server.worker_threads, Some(4));
    }

    #[test]
    fn invalid_fallback_config_is_rejected() {
        let invalid = || {
            let mut cfg = memory_config();
            cfg.context.user_id = 0;
            cfg
        };
        let err = resolve_config(Err(anyhow::anyhow!("missing")), invalid).unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }
}
