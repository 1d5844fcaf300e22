use dotenvy::dotenv;
use petclinic::{
    bootstrap,
    config::{database, seed, server::ServerConfig},
    errors::Result,
    services::Services,
    web::{self, AppState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    let config = ServerConfig::from_env();

    // 3. Connect and make sure every table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;
    let services = Services::sea_orm(&db);

    // 4. Seed an empty database
    if config.seed_file.exists() {
        let seed = seed::load_config(&config.seed_file)?;
        bootstrap::load_data(&services, &seed)
            .await
            .inspect_err(|e| error!("Failed to load seed data: {}", e))?;
    } else {
        warn!(
            "Seed file {} not found, starting without bootstrap data",
            config.seed_file.display()
        );
    }

    // 5. Serve
    let app = web::router(Arc::new(AppState::new(&services)));
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("Pet clinic listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
