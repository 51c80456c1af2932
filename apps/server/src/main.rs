use anyhow::Context;
use folio::domain::config::{ApiConfig, LoggingConfig};
use folio::kernel::config::load_config;
use folio_logger::{LevelFilter, Logger};
use folio_server::Server;

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?;
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);

    let logger = match &cfg.directory {
        Some(directory) => builder.path(directory).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

#[folio_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build().await?.run().await
}
