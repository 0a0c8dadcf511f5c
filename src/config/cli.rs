use crate::config::toml_config::StoreConfig;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "store-entity")]
#[command(about = "Build a store from an address and print it as JSON")]
pub struct CliConfig {
    #[arg(long, conflicts_with = "config", help = "Store address")]
    pub address: Option<String>,

    #[arg(long, help = "TOML file with a [store] address entry")]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併命令列參數與設定檔；`--pretty` 優先於設定檔
    pub fn store_config(&self) -> Result<StoreConfig> {
        match (&self.address, &self.config) {
            (Some(address), None) => Ok(StoreConfig::from_address(address.clone(), self.pretty)),
            (None, Some(path)) => {
                let mut config = StoreConfig::from_file(path)?;
                if self.pretty {
                    config.set_pretty(true);
                }
                Ok(config)
            }
            _ => Err(StoreError::config(
                "exactly one of --address or --config is required",
            )),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.address, &self.config) {
            (Some(_), Some(_)) | (None, None) => Err(StoreError::config(
                "exactly one of --address or --config is required",
            )),
            (None, Some(path)) => validate_path("config", path),
            (Some(_), None) => Ok(()),
        }
    }
}
