//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is required")]
    Missing(&'static str),

    /// A port variable does not hold a valid port number.
    #[error("{name} is not a valid port: {value}")]
    InvalidPort { name: &'static str, value: String },
}

/// Service configuration.
///
/// Reads from environment variables (all required unless noted):
/// - `DB_USER`, `DB_PASS` (or `DB_PASSWORD`): database credentials
/// - `DB_NAME`, `DB_COLLECTION`: database and collection holding locations
/// - `DB_HOST`, `DB_PORT`: database server
/// - `APP_PORT`: HTTP listen port
/// - `APP_HOST`: bind address (optional, default: `"0.0.0.0"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub db_collection: String,
    pub db_host: String,
    pub db_port: u16,
    pub app_host: String,
    pub app_port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let db_user = require("DB_USER")?;
        let db_pass = get("DB_PASS")
            .or_else(|| get("DB_PASSWORD"))
            .ok_or(ConfigError::Missing("DB_PASS"))?;
        let db_name = require("DB_NAME")?;
        let db_collection = require("DB_COLLECTION")?;
        let db_host = require("DB_HOST")?;
        let db_port = parse_port("DB_PORT", require("DB_PORT")?)?;
        let app_port = parse_port("APP_PORT", require("APP_PORT")?)?;
        let app_host = get("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Self {
            db_user,
            db_pass,
            db_name,
            db_collection,
            db_host,
            db_port,
            app_host,
            app_port,
        })
    }

    /// Returns the MongoDB connection string.
    pub fn mongo_uri(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/{}?retryWrites=true&w=majority&authSource=admin&ssl=false",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_port(name: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidPort { name, value })
}

/// Log output format, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, with source locations.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`; anything other than `pretty` selects JSON.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}
