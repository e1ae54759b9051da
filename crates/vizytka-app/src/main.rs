use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vizytka_app::cli::{Cli, Command};
use vizytka_app::run;
use vizytka_app::store::JsonFileStore;
use vizytka_core::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let store = JsonFileStore::new(Path::new(&config.storage.state_dir));

    match cli.command {
        Command::Convert { input, output } => {
            let path = run::convert(&store, &config, &input, output).await?;
            tracing::info!(path = %path.display(), "Conversion finished");
        }
        Command::Export { output } => {
            let path = run::export(&store, &config, output).await?;
            tracing::info!(path = %path.display(), "Export finished");
        }
        Command::Clear => {
            run::clear(&store)?;
            tracing::info!("Session list cleared");
        }
    }

    Ok(())
}
