use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use users_api::{build_router, routes::normalize_prefix, AppState};
use users_infrastructure::database::{connection, SqliteUserRepository};
use users_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    users_shared::telemetry::init_telemetry();

    info!("Users server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Open database and apply schema
    info!("Opening database at {}...", config.database.path);
    let pool = connection::create_pool(
        &config.database.path,
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await?;
    connection::run_migrations(&pool).await?;
    info!("Database ready, users table created or already exists.");

    // Wire repository -> service -> router
    let user_repo = Arc::new(SqliteUserRepository::new(pool));
    let state = AppState::new(user_repo, config.clone());
    let app = build_router(state);

    let prefix = normalize_prefix(&config.app.api_prefix).unwrap_or_default();
    info!("Users API mounted at {}/users", prefix);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
