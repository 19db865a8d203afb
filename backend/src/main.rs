//! Service entry point: loads settings, wires storage and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gratitude_journal::inbound::http::health::HealthState;
use gratitude_journal::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use gratitude_journal::seed::seed_demo_users_on_startup;
use gratitude_journal::settings::AppSettings;
use server::{ServerConfig, build_http_state, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let http_state = build_http_state(&config);
    seed_demo_users_on_startup(settings.seed_demo_users, http_state.users.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, http_state)?;
    info!(%bind_addr, "gratitude journal listening");
    server.await
}
