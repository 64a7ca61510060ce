mod batch;
mod config;
mod generator;
mod models;
mod store;
mod utils;

use anyhow::Result;
use config::Config;
use generator::GridGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_swipe_levelgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Single top-level handler: one diagnostic line, nothing is written on
    // failure since the output write only happens after the full transform
    if let Err(e) = run() {
        tracing::error!("Level regeneration failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let levels = store::load_levels(&config.levels_path)?;

    let generator = GridGenerator::new(config.placement_attempts);
    let mut rng = rand::rng();
    let regenerated = batch::regenerate_levels(levels, &generator, &mut rng)?;

    store::save_levels(&config.levels_path, &regenerated)?;

    println!("Regenerated {} levels with 8-way paths.", regenerated.len());

    Ok(())
}
