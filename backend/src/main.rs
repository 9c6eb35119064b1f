//! User service entry-point: load settings, prepare the schema, then serve.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(feature = "metrics")]
use server::MetricsLayer;
use server::{ServerConfig, create_server, drain_on, shutdown_signal};
use user_service::domain::UserDirectoryService;
use user_service::inbound::http::health::HealthState;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::persistence::{DbPool, DieselUserRepository, apply_schema};
use user_service::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(format!("failed to load settings: {e}"))
    })?;
    let bind_addr = settings.bind_addr()?;
    let pool_config = settings.pool_config()?;

    apply_schema(pool_config.database_url()).await.map_err(|e| {
        error!(error = %e, "schema setup failed");
        std::io::Error::other(e)
    })?;

    let pool = DbPool::new(pool_config).await.map_err(|e| {
        error!(error = %e, "database pool setup failed");
        std::io::Error::other(e)
    })?;
    let repository = Arc::new(DieselUserRepository::new(pool));
    let http_state = HttpState::from_service(Arc::new(UserDirectoryService::new(repository)));

    let config = ServerConfig::new(bind_addr, http_state);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(MetricsLayer::install());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    info!(%bind_addr, "user service listening");
    server.await
}
