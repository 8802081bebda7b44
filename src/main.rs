use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use translate_switcher::config::Config;
use translate_switcher::i18n::load_catalog;
use translate_switcher::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_switcher=info".parse()?),
        )
        .init();

    info!("Starting translation widget demo server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Build the language catalog (built-in set or LANGUAGES_FILE)
    let catalog = load_catalog(&config)?;
    info!(
        "Catalog ready: {} languages, default '{}'",
        catalog.languages().len(),
        catalog.default_code()
    );

    server::run(Arc::new(config), catalog).await
}
