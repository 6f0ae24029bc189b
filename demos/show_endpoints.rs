use anyhow::Context;
use paypal_recurring::{Configuration, SharedConfiguration};

fn read_config() -> anyhow::Result<Configuration> {
    match std::env::args().nth(1) {
        Some(path) => Configuration::load(&path)
            .with_context(|| format!("Failed to load the configuration from {}", path)),
        None => Configuration::from_env()
            .context("Failed to assemble the configuration from PAYPAL_* variables"),
    }
}

fn run() -> anyhow::Result<()> {
    let config = SharedConfiguration::new(read_config()?);

    tracing::info!(
        environment = %config.environment(),
        auth_mode = %config.auth_mode(),
        "PayPal configuration"
    );
    tracing::info!("API endpoint: {}", config.api_endpoint()?);
    tracing::info!("API version: {}", config.api_version());
    tracing::info!("Site endpoint: {}", config.site_endpoint()?);
    tracing::info!(
        "Sample checkout link: {}",
        config.checkout_url("EC-00000000000000000")?
    );

    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run() {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
