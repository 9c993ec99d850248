//! Command-line arguments. Flags override values from the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::store::OrderingPolicy;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dog-gallery")]
#[command(about = "Browse dog images by breed and keep a list of favorites")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.config/dog-gallery/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Dog API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Key sent as the x-api-key header
    #[arg(long, env = "DOG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Images fetched per search
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Which response wins when fetches overlap: latest-dispatched or latest-settled
    #[arg(long)]
    pub ordering: Option<OrderingPolicy>,

    /// Breed to show on startup instead of random images
    #[arg(long, short = 'b')]
    pub breed: Option<String>,
}

impl Cli {
    /// Path the config should be read from.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(page_size) = self.page_size {
            config.api.page_size = page_size;
        }
        if let Some(ordering) = self.ordering {
            config.store.ordering = ordering;
        }
    }
}
