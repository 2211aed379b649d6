use server::config;
use server::db;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let history = if config.persist_history {
        tracing::info!("Opening game history at {}", config.database_url);
        let pool = db::pool::create_pool(&config.database_url).await?;
        db::pool::run_migrations(&pool).await?;
        Some(pool)
    } else {
        tracing::info!("Game history disabled");
        None
    };

    let app = server::build_router(server::new_shared_game(), history);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
