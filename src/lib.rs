pub mod api; // HTTP API
pub mod config;
pub mod core_state; // Injected store handle
pub mod db;
pub mod models;
pub mod search; // Free-text advocate filter

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Run the directory server until Ctrl-C.
pub async fn run(settings: config::Settings) -> anyhow::Result<()> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::from_config(settings.database_path));

    match core.db_path() {
        Some(path) => {
            // Migrate once up front so request handlers never race on a fresh schema.
            let conn = db::open_database(path)?;
            tracing::info!(path = %path.display(), "Database ready");

            if settings.seed {
                let summary = db::seed::seed_database(&conn, &mut rand::thread_rng())?;
                tracing::info!(?summary, "Seeded on startup");
            }
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; data routes will answer 500");
            if settings.seed {
                anyhow::bail!("--seed requires a database path");
            }
        }
    }

    let server = api::start_api_server(core, settings.bind)
        .await
        .map_err(anyhow::Error::msg)?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl-C received");
    server.stop().await;

    Ok(())
}
