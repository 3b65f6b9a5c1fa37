//! Load runtime configuration, falling back to defaults when absent.

use serde::Deserialize;
use std::{fs, path::Path};

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_STORE_PATH: &str = "data.json";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MarketCfg {
    /// Root of a CoinGecko-compatible API.
    pub base_url: String,
}

impl Default for MarketCfg {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StateCfg {
    /// Wallet JSON file, rewritten on every commit.
    pub path: String,
}

impl Default for StateCfg {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub market: MarketCfg,
    pub state: StateCfg,
}

impl AppConfig {
    /// Read the YAML config if present; a missing file means defaults, so the
    /// binary runs with zero setup.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&s)?;
        Ok(cfg)
    }
}
