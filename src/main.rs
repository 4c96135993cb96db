//! parliament-watch - HTTP server for the analytics API.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parliament_watch::adapters::http::{build_router, AnalyticsAppState};
use parliament_watch::adapters::{
    PostgresActivityReader, PostgresStatsRepository, PostgresVoteReader,
};
use parliament_watch::config::{AppConfig, ServerConfig};

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting parliament-watch"
    );

    let pool = match config.database.connect().await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let state = AnalyticsAppState {
        vote_reader: Arc::new(PostgresVoteReader::new(pool.clone())),
        stats_repository: Arc::new(PostgresStatsRepository::new(pool.clone())),
        activity_reader: Arc::new(PostgresActivityReader::new(pool)),
        settings: config.analytics.clone(),
    };
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
