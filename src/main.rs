use anyhow::Result;
use fitness_dashboard::api::routes::create_routes;
use fitness_dashboard::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("Database ready ({} max connections)", db_config.max_connections);

    let app = create_routes(pool);

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Fitness dashboard server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
