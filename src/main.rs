use anyhow::Result;
use tracing_subscriber::EnvFilter;

use subscription_service::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    subscription_service::server::run(config).await
}
