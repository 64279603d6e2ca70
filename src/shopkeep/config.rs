use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 20;
const DEFAULT_CURRENCY: &str = "Rs.";

/// Configuration for shopkeep, stored next to the data files as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Quantity below which a product is flagged as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Currency prefix used when printing amounts (e.g. "Rs.", "$")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }
}
