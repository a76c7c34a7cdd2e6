use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8080;
const DEFAULT_BCRYPT_COST: u32 = 12;

/// Log output format selected through `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Connection settings of one Postgres server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    /// Builds a `postgres://` connection URL, percent-encoding credentials.
    pub fn url(&self) -> Result<String, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidEnvVar {
            name: "DB_HOST".to_string(),
            value: self.host.clone(),
            reason: reason.to_string(),
        };

        let mut url = Url::parse(&format!("postgres://{}", self.host))
            .map_err(|e| invalid(&e.to_string()))?;
        url.set_port(Some(self.port))
            .map_err(|_| invalid("cannot carry a port"))?;
        url.set_username(&self.user)
            .map_err(|_| invalid("cannot carry credentials"))?;
        url.set_password(Some(&self.password))
            .map_err(|_| invalid("cannot carry credentials"))?;
        url.set_path(&self.dbname);

        Ok(url.to_string())
    }
}

pub struct Config {
    /// Connection URL of the primary (read/write) database.
    pub database_url: String,
    /// Connection URL of the optional read replica.
    pub replica_url: Option<String>,

    pub app_env: String,
    pub host: String,
    pub port: u16,

    /// Allowed CORS origins; `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
    pub bcrypt_cost: u32,

    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` takes precedence over the individual `DB_*` variables. A replica is
    /// configured only when `DB_SLAVE_HOST` is set; its other settings fall back to the
    /// primary's values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let or_default =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let master = match lookup("DATABASE_URL") {
            Some(url) => (url, None),
            None => {
                let master = DatabaseConfig {
                    host: required("DB_HOST")?,
                    port: parse_var(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
                    dbname: required("DB_NAME")?,
                    user: required("DB_USER")?,
                    password: or_default("DB_PASSWORD", ""),
                };
                (master.url()?, Some(master))
            }
        };
        let (database_url, master_config) = master;

        let replica_url = match lookup("DB_SLAVE_HOST") {
            Some(host) => {
                let base = match master_config {
                    Some(master) => master,
                    None => DatabaseConfig {
                        host: host.clone(),
                        port: DEFAULT_DB_PORT,
                        dbname: required("DB_SLAVE_NAME")?,
                        user: required("DB_SLAVE_USER")?,
                        password: String::new(),
                    },
                };
                let replica = DatabaseConfig {
                    host,
                    port: parse_var(&lookup, "DB_SLAVE_PORT", base.port)?,
                    dbname: lookup("DB_SLAVE_NAME").unwrap_or(base.dbname),
                    user: lookup("DB_SLAVE_USER").unwrap_or(base.user),
                    password: lookup("DB_SLAVE_PASSWORD").unwrap_or(base.password),
                };
                Some(replica.url()?)
            }
            None => None,
        };

        let log_format = match or_default("LOG_FORMAT", "text").to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "LOG_FORMAT".to_string(),
                    value: other.to_string(),
                    reason: "expected 'text' or 'json'".to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            database_url,
            replica_url,
            app_env: or_default("APP_ENV", "development"),
            host: or_default("APP_HOST", DEFAULT_APP_HOST),
            port: parse_var(&lookup, "APP_PORT", DEFAULT_APP_PORT)?,
            cors_allowed_origins: or_default("CORS_ALLOWED_ORIGINS", "*")
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            bcrypt_cost: parse_var(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            log_level: or_default("LOG_LEVEL", "info"),
            log_format,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    /// Development defaults backed by an in-memory SQLite database.
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            replica_url: None,
            app_env: "development".to_string(),
            host: DEFAULT_APP_HOST.to_string(),
            port: DEFAULT_APP_PORT,
            cors_allowed_origins: vec!["*".to_string()],
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
