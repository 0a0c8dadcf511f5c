use crate::domain::store::Store;
use crate::utils::error::{Result, StoreError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

impl StoreConfig {
    pub fn from_address(address: impl Into<String>, pretty: bool) -> Self {
        Self {
            store: StoreSection {
                address: address.into(),
            },
            output: Some(OutputConfig {
                pretty: Some(pretty),
            }),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    ///
    /// Environment references are resolved after parsing, inside the address
    /// value only, so substituted text is never read as TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| StoreError::config(format!("TOML parsing error: {}", e)))?;

        config.store.address = Self::substitute_env_vars(&config.store.address);
        Ok(config)
    }

    /// 替換環境變數 (例如 ${STORE_ADDRESS})，找不到的變數保持原樣
    fn substitute_env_vars(value: &str) -> String {
        ENV_VAR_RE
            .replace_all(value, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(false)
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.output.get_or_insert_with(OutputConfig::default).pretty = Some(pretty);
    }

    /// Build the configured store. The address is validated by [`Store::new`].
    pub fn build_store(&self) -> Result<Store> {
        Store::new(&self.store.address)
    }
}
