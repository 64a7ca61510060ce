use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Level file that is read, regenerated and overwritten in place
    pub levels_path: String,
    /// Placement attempts per word before the batch is aborted
    pub placement_attempts: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let levels_path =
            env::var("LEVELS_PATH").unwrap_or_else(|_| "assets/levels.json".to_string());

        let placement_attempts = env::var("PLACEMENT_ATTEMPTS")
            .unwrap_or_else(|_| "200".to_string())
            .parse()
            .context("PLACEMENT_ATTEMPTS must be a number")?;

        Ok(Config {
            levels_path,
            placement_attempts,
        })
    }
}
