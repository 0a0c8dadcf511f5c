pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::StoreConfig;
pub use domain::{model::StoreRecord, store::Store};
pub use utils::error::{Result, StoreError, ValidationError};
