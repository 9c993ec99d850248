//! Configuration loading.
//!
//! Read from `config.toml` in the platform config directory; every field has
//! a default, so a missing file or a partial file is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StoreConfig, UiConfig};
