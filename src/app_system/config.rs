use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cart_actor::persistence::CART_STORAGE_KEY;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub actors: ActorConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Whether we run in a browser-like context with session storage.
    pub browser: bool,
    pub key: String,
    pub quota_bytes: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CatalogConfig {
    /// JSON catalog feed; the built-in sample catalog is used when unset.
    pub data_path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActorConfig {
    pub buffer_size: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub browser: Option<bool>,
    pub storage_key: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                browser: true,
                key: CART_STORAGE_KEY.to_string(),
                quota_bytes: Some(5 * 1024 * 1024),
            },
            catalog: CatalogConfig::default(),
            actors: ActorConfig { buffer_size: 32 },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file, then `CATALOG_CART_*` variables, then
    /// explicit overrides.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from("catalog-cart.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(storage) = patch.storage {
            if let Some(browser) = storage.browser {
                self.storage.browser = browser;
            }
            if let Some(key) = storage.key {
                self.storage.key = key;
            }
            if let Some(quota_bytes) = storage.quota_bytes {
                self.storage.quota_bytes = Some(quota_bytes);
            }
        }

        if let Some(catalog) = patch.catalog {
            if let Some(data_path) = catalog.data_path {
                self.catalog.data_path = Some(data_path);
            }
        }

        if let Some(actors) = patch.actors {
            if let Some(buffer_size) = actors.buffer_size {
                self.actors.buffer_size = buffer_size;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("CATALOG_CART_STORAGE_BROWSER") {
            self.storage.browser = parse_bool("CATALOG_CART_STORAGE_BROWSER", &value)?;
        }
        if let Some(value) = read_env("CATALOG_CART_STORAGE_KEY") {
            self.storage.key = value;
        }
        if let Some(value) = read_env("CATALOG_CART_STORAGE_QUOTA_BYTES") {
            self.storage.quota_bytes =
                Some(parse_usize("CATALOG_CART_STORAGE_QUOTA_BYTES", &value)?);
        }
        if let Some(value) = read_env("CATALOG_CART_CATALOG_PATH") {
            self.catalog.data_path = Some(PathBuf::from(value));
        }
        if let Some(value) = read_env("CATALOG_CART_BUFFER_SIZE") {
            self.actors.buffer_size = parse_usize("CATALOG_CART_BUFFER_SIZE", &value)?;
        }
        if let Some(value) = read_env("CATALOG_CART_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = read_env("CATALOG_CART_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(browser) = overrides.browser {
            self.storage.browser = browser;
        }
        if let Some(storage_key) = overrides.storage_key {
            self.storage.key = storage_key;
        }
        if let Some(catalog_path) = overrides.catalog_path {
            self.catalog.data_path = Some(catalog_path);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Validation("storage.key must not be empty".to_string()));
        }
        if self.storage.quota_bytes == Some(0) {
            return Err(ConfigError::Validation(
                "storage.quota_bytes must be greater than zero".to_string(),
            ));
        }
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "actors.buffer_size must be greater than zero".to_string(),
            ));
        }
        validate_logging(&self.logging)
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("catalog-cart.toml"), PathBuf::from("config/catalog-cart.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    if logging.level.trim().is_empty() {
        return Err(ConfigError::Validation("logging.level must not be empty".to_string()));
    }
    tracing_subscriber::EnvFilter::try_new(&logging.level)
        .map(|_| ())
        .map_err(|err| {
            ConfigError::Validation(format!("logging.level `{}` is not a valid filter: {err}", logging.level))
        })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    storage: Option<StoragePatch>,
    catalog: Option<CatalogPatch>,
    actors: Option<ActorPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct StoragePatch {
    browser: Option<bool>,
    key: Option<String>,
    quota_bytes: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    data_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ActorPatch {
    buffer_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    const VARS: &[&str] = &[
        "CATALOG_CART_STORAGE_BROWSER",
        "CATALOG_CART_STORAGE_KEY",
        "CATALOG_CART_STORAGE_QUOTA_BYTES",
        "CATALOG_CART_CATALOG_PATH",
        "CATALOG_CART_BUFFER_SIZE",
        "CATALOG_CART_LOG_LEVEL",
        "CATALOG_CART_LOG_FORMAT",
    ];

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn clear_vars() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog-cart.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.storage.browser);
        assert_eq!(config.storage.key, "catalog-cart");
        assert_eq!(config.catalog.data_path, None);
    }

    #[test]
    fn precedence_defaults_file_env_overrides() {
        let _guard = env_lock();
        clear_vars();

        let (_dir, path) = write_config(
            r#"
            [storage]
            browser = false
            key = "file-key"

            [actors]
            buffer_size = 8

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        env::set_var("CATALOG_CART_STORAGE_KEY", "env-key");
        env::set_var("CATALOG_CART_LOG_LEVEL", "warn");

        let config = AppConfig::load(LoadOptions {
            config_path: Some(path),
            require_file: true,
            overrides: ConfigOverrides { log_level: Some("error".to_string()), ..Default::default() },
        });
        clear_vars();
        let config = config.unwrap();

        assert!(!config.storage.browser);
        assert_eq!(config.storage.key, "env-key");
        assert_eq!(config.actors.buffer_size, 8);
        assert_eq!(config.logging.level, "error");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn missing_required_file_is_reported() {
        let _guard = env_lock();
        clear_vars();

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = AppConfig::load(LoadOptions {
            config_path: Some(missing.clone()),
            require_file: true,
            overrides: ConfigOverrides::default(),
        });

        match result {
            Err(ConfigError::MissingConfigFile(path)) => assert_eq!(path, missing),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_env_override_fails_fast() {
        let _guard = env_lock();
        clear_vars();

        env::set_var("CATALOG_CART_STORAGE_BROWSER", "sometimes");
        let result = AppConfig::load(LoadOptions::default());
        clear_vars();

        assert!(matches!(result, Err(ConfigError::InvalidEnvOverride { key, .. }) if key == "CATALOG_CART_STORAGE_BROWSER"));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.actors.buffer_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.logging.level = "catalog_cart=loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.storage.key = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn logging_level_accepts_filter_directives() {
        let mut config = AppConfig::default();
        config.logging.level = "warn,catalog_cart::cart_actor=debug".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
