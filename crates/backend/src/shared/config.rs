use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::introspection::{ActionRecognition, IntrospectionOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid server address {0}")]
    Address(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub introspection: IntrospectionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Include panic messages in 500 responses
    #[serde(default)]
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            expose_error_details: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Address(format!("{}:{}", self.host, self.port)))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IntrospectionConfig {
    /// Name reported as `originSystemName`; the crate name when absent
    #[serde(default)]
    pub origin_system_name: Option<String>,
    #[serde(default = "default_reserved_prefixes")]
    pub reserved_namespace_prefixes: Vec<String>,
    #[serde(default)]
    pub action_recognition: ActionRecognition,
    #[serde(default)]
    pub report_head_and_options: bool,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            origin_system_name: None,
            reserved_namespace_prefixes: default_reserved_prefixes(),
            action_recognition: ActionRecognition::default(),
            report_head_and_options: false,
        }
    }
}

impl IntrospectionConfig {
    pub fn origin_system_name(&self) -> &str {
        self.origin_system_name
            .as_deref()
            .unwrap_or(env!("CARGO_PKG_NAME"))
    }

    pub fn options(&self) -> IntrospectionOptions {
        IntrospectionOptions {
            reserved_namespace_prefixes: self.reserved_namespace_prefixes.clone(),
            action_recognition: self.action_recognition,
            report_head_and_options: self.report_head_and_options,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_reserved_prefixes() -> Vec<String> {
    IntrospectionOptions::default().reserved_namespace_prefixes
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
expose_error_details = false

[logging]
level = "info"

[introspection]
reserved_namespace_prefixes = ["system::runtime", "system::diagnostics"]
action_recognition = "capability"
report_head_and_options = false
"#;

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line
    Explicit(PathBuf),
    /// config.toml next to the executable
    ExeDir(PathBuf),
    /// Embedded default; `searched` is the config.toml that was not found
    Embedded { searched: Option<PathBuf> },
}

impl ConfigSource {
    /// Report the source; call after the tracing subscriber is installed
    pub fn log(&self) {
        match self {
            Self::Explicit(path) | Self::ExeDir(path) => {
                tracing::info!("Loading config from: {}", path.display());
            }
            Self::Embedded { searched } => {
                if let Some(path) = searched {
                    tracing::warn!("config.toml not found at: {}", path.display());
                }
                tracing::info!("Using default embedded configuration");
            }
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Explicit path (from the command line)
/// 2. Next to the executable (for production)
/// 3. Falls back to embedded default config
///
/// Logging is not set up yet at this point, so the source is returned
/// for [`ConfigSource::log`].
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let mut searched = None;
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let config = read_config(&config_path)?;
                return Ok((config, ConfigSource::ExeDir(config_path)));
            }
            searched = Some(config_path);
        }
    }

    let config = parse_config(DEFAULT_CONFIG)?;
    Ok((config, ConfigSource::Embedded { searched }))
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}
