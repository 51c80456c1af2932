use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides, e.g. `FOLIO__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "FOLIO";
const DEFAULT_CONFIG_FILE: &str = "server";

#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional config file overlaid with environment variables.
///
/// 1. **Base File**: `path` (default `server`, any extension the `config` crate knows). A missing
///    file is not an error; every field then comes from its default.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`, nested with double
///    underscores (`FOLIO__SECURITY__ADMIN__PASSWORD` maps to `security.admin.password`).
///
/// # Errors
/// Fails when the file exists but cannot be parsed, or when the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
