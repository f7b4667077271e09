use passguard::config::ApiConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    passguard::setup_logger()?;

    match passguard::init_wordlist() {
        Ok(count) => info!("weak-word list loaded: {} entries", count),
        Err(e) => warn!("weak-word list not loaded ({}), using built-in defaults", e),
    }

    let config = ApiConfig::load()?;
    passguard::api::run(config).await?;

    Ok(())
}
