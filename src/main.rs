/**
 * Socialnet Server Binary
 *
 * Loads configuration, initializes tracing, builds the application and
 * serves it. Any startup failure (missing configuration, unreachable
 * database, failed migration) aborts the process with a non-zero exit.
 */

use tracing_subscriber::EnvFilter;

use socialnet::server::{config::AppConfig, init::create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("socialnet=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
