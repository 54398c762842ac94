use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding durable client state. `None` resolves under `$HOME`.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub default_filter: String,
}

impl Environment {
    fn from_app_env(value: Option<&str>) -> Self {
        match value {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::preset(Environment::from_app_env(env::var("APP_ENV").ok().as_deref())).with_env_overrides()
    }

    fn preset(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORTFOLIO_API_URL") {
            match normalize_base_url(&v) {
                Ok(url) => self.api.base_url = url,
                Err(e) => tracing::warn!("Ignoring PORTFOLIO_API_URL '{}': {}", v, e),
            }
        }
        if let Ok(v) = env::var("PORTFOLIO_CONFIG_DIR") {
            if !v.trim().is_empty() {
                self.storage.dir = Some(PathBuf::from(v));
            }
        }
        self.logging.default_filter = log_filter(&self, env::var("PORTFOLIO_LOG").ok().as_deref());

        self
    }

    /// Replace the API base URL, e.g. from a command-line flag
    pub fn with_api_url(mut self, raw: &str) -> anyhow::Result<Self> {
        self.api.base_url = normalize_base_url(raw)?;
        Ok(self)
    }

    /// Resolve the durable storage directory, creating it if needed
    pub fn storage_dir(&self) -> anyhow::Result<PathBuf> {
        let dir = match &self.storage.dir {
            Some(dir) => dir.clone(),
            None => {
                let home = env::var("HOME")
                    .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
                PathBuf::from(home).join(".config").join("portfolio")
            }
        };

        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }

        Ok(dir)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            storage: StorageConfig { dir: None },
            logging: LogConfig {
                default_filter: "warn".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            storage: StorageConfig { dir: None },
            logging: LogConfig {
                default_filter: "info".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
            storage: StorageConfig { dir: None },
            logging: LogConfig {
                default_filter: "error".to_string(),
            },
        }
    }
}

/// Validate a base URL and strip the trailing slash so endpoints
/// (which always start with `/`) can be appended verbatim.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("invalid base URL '{}': {}", raw, e))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("unsupported URL scheme '{}'", other),
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn log_filter(preset: &AppConfig, override_filter: Option<&str>) -> String {
    match override_filter {
        Some(filter) if !filter.trim().is_empty() => filter.to_string(),
        _ => preset.logging.default_filter.clone(),
    }
}

/// Default log filter from `APP_ENV` and `PORTFOLIO_LOG` alone. Unlike
/// [`config`] this emits no events, so it is safe before a subscriber exists.
pub fn log_filter_from_env() -> String {
    let preset = AppConfig::preset(Environment::from_app_env(env::var("APP_ENV").ok().as_deref()));
    log_filter(&preset, env::var("PORTFOLIO_LOG").ok().as_deref())
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
