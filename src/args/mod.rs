//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Browse and search a remote movie catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "moviedeck", version, about)]
pub struct Args {
    /// Catalog API key. Overrides the config file.
    #[arg(long, env = "TMDB_API_KEY")]
    pub api_key: Option<String>,

    /// Catalog base URL. Overrides the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to an alternate config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Folds CLI/env overrides into a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(api_key) = &self.api_key {
            config.catalog.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
    }
}
