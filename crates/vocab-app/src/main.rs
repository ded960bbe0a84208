use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_config::Config;
use vocab_core::state::AppState;
use vocab_dictionary::{CambridgeClient, DictionarySource};
use vocab_photos::{IStockPhotos, PhotoSearch};
use vocab_types::{AppEvent, Region};

pub mod controller;
pub mod events;
pub mod profile;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;

/// Look up English words and collect them as vocabulary cards
#[derive(Parser, Debug)]
#[command(name = "vocab", version)]
struct Args {
    /// Profile to load from the profiles directory
    #[arg(long, default_value = "main")]
    profile: String,

    /// Dictionary region shown first (uk, us, business)
    #[arg(long)]
    region: Option<Region>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Word to look up right away
    word: Option<String>,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

fn load_config(args: &Args) -> Config {
    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not prepare profiles: {e}");
    }

    let mut config = profile::load_user_profile(&args.profile).unwrap_or_else(|e| {
        tracing::warn!("Failed to load profile '{}': {e}, using defaults", args.profile);
        Config::default()
    });
    config.apply_env_overrides();

    if let Some(region) = args.region {
        config.dictionary.default_region = region;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = load_config(&args);
    tracing::info!(
        "Using {} with the {} region",
        config.dictionary.host,
        config.dictionary.default_region
    );

    let dictionary: Arc<dyn DictionarySource> =
        Arc::new(CambridgeClient::new(&config.dictionary, &config.network)?);
    let photos: Arc<dyn PhotoSearch> = Arc::new(IStockPhotos::new(&config.photos, &config.network)?);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(dictionary, photos);

    if let Some(word) = args.word {
        controller.send(AppEvent::Lookup(word)).await?;
    }

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
    Ok(())
}
