use anyhow::Context;
use clap::Parser;
use std::io::Write;
use store_entity::utils::{logger, validation::Validate};
use store_entity::{CliConfig, Store, StoreError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(logger::LogFormat::from_json_flag(config.log_json), config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let (store, pretty) = match build(&config) {
        Ok(built) => built,
        Err(e) => fail(&e),
    };

    let json = match store.to_json_string(pretty) {
        Ok(json) => json,
        Err(e) => fail(&e),
    };

    writeln!(std::io::stdout().lock(), "{}", json).context("writing store JSON to stdout")?;
    tracing::info!("Store created: {}", store);

    Ok(())
}

fn build(config: &CliConfig) -> store_entity::Result<(Store, bool)> {
    let store_config = config.store_config()?;
    let store = store_config.build_store()?;
    Ok((store, store_config.pretty()))
}

fn fail(e: &StoreError) -> ! {
    tracing::error!("Failed to create store: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 設定錯誤 1，輸入驗證錯誤 2
    let exit_code = match e {
        StoreError::Validation(_) | StoreError::Construction { .. } => 2,
        StoreError::Config { .. } | StoreError::Io(_) | StoreError::Serialization(_) => 1,
    };
    std::process::exit(exit_code);
}
