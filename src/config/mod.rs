//! Application configuration.
//!
//! One TOML file under the platform config dir, every field defaulted so a
//! missing file is a working configuration (minus the API key, which startup
//! checks after CLI/env overrides are applied).

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config};
