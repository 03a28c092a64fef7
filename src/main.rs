use anyhow::Result;
use seasoncast::{App, SeasonCastConfig, WeatherApiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the console surface on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = SeasonCastConfig::default();
    let default_place = config.default_place.clone();
    let client = WeatherApiClient::new(config)?;

    App::new(client, default_place).run().await
}
