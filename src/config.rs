//! Configuration loading and constants.
//!
//! Settings come from three places, highest priority first: the `PORT`
//! environment variable, an optional TOML file, and the built-in defaults
//! below. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Appointment list - the snapshot never changes while the process runs
pub const HTTP_CACHE_APPOINTMENTS_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_APPOINTMENTS_SWR: u32 = 30;

pub const CACHE_CONTROL_APPOINTMENTS: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_APPOINTMENTS_MAX_AGE,
    HTTP_CACHE_APPOINTMENTS_SWR
);

// =============================================================================
// Service Identity
// =============================================================================

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "Appointment Service";

/// Status reported by the health endpoint
pub const HEALTH_STATUS_OK: &str = "OK";

/// Message returned alongside the appointment list
pub const APPOINTMENTS_RETRIEVED_MESSAGE: &str = "Appointments retrieved successfully";

// =============================================================================
// Server Defaults
// =============================================================================

/// Bind to all interfaces
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// Environment variable that overrides the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Configuration file read when `--config` is not given and the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "appointment_service=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Parsed log format. Only valid after `AppConfig::validate` has passed.
    pub fn log_format(&self) -> LogFormat {
        match self.format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Resolve configuration for startup.
    ///
    /// An explicit path must exist. Without one, `DEFAULT_CONFIG_PATH` is used
    /// if present, otherwise the built-in defaults. The `PORT` environment
    /// variable is applied last.
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };

        config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        Ok(config)
    }

    fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a `PORT` value. Unset or empty values leave the port untouched.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };

        self.http.port = raw.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "{} must be a port number between 0 and 65535, got {:?}",
                PORT_ENV_VAR, raw
            ))
        })?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format {:?}, expected \"text\" or \"json\"",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 3001);
        assert_eq!(config.logging.log_format(), LogFormat::Text);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nhost = \"127.0.0.1\"\nport = 8080\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.logging.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_partial_http_section() {
        let config = AppConfig::from_toml("[http]\nport = 5000").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 5000);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml("[http\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("4000")).unwrap();
        assert_eq!(config.http.port, 4000);
    }

    #[test]
    fn test_port_override_unset_or_empty_keeps_port() {
        let mut config = AppConfig::default();
        config.apply_port_override(None).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);

        config.apply_port_override(Some("")).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_port_override_wins_over_file() {
        let mut config = AppConfig::from_toml("[http]\nport = 8080").unwrap();
        config.apply_port_override(Some("4000")).unwrap();
        assert_eq!(config.http.port, 4000);
    }

    #[test]
    fn test_port_override_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = config.apply_port_override(Some("not-a-port")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = config.apply_port_override(Some("70000")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_cache_control_header_value() {
        assert_eq!(
            CACHE_CONTROL_APPOINTMENTS,
            "public, max-age=60, stale-while-revalidate=30"
        );
    }
}
