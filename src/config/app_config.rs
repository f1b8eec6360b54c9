use chrono::{TimeDelta, Utc};
use config::ConfigError;
use serde::Deserialize;
use url::Url;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Falls back to the `DATABASE_URL` environment variable when unset
    pub database_url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub verification_token_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// When disabled, reset emails are only logged
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_name: String,
    pub from_email: String,
    /// Front-end page that receives `email` and `token` query parameters
    pub reset_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: None,
            max_connections: 10,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_hours: 24,
            verification_token_ttl_minutes: 30,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: "Guardian Accounts".to_string(),
            from_email: "no-reply@localhost".to_string(),
            reset_url: "http://localhost:3000/reset-password".to_string(),
        }
    }
}

impl StorageConfig {
    /// Resolve the connection string from config or the environment
    pub fn resolve_database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
    }
}

impl AuthConfig {
    /// Lifetime of access tokens issued at login
    pub fn access_token_ttl(&self) -> Result<TimeDelta, ConfigError> {
        i64::try_from(self.jwt_expiration_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .and_then(checked_ttl)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "auth.jwt_expiration_hours out of range: {}",
                    self.jwt_expiration_hours
                ))
            })
    }

    /// Lifetime of password-reset tokens
    pub fn verification_token_ttl(&self) -> Result<TimeDelta, ConfigError> {
        TimeDelta::try_minutes(self.verification_token_ttl_minutes)
            .and_then(checked_ttl)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "auth.verification_token_ttl_minutes out of range: {}",
                    self.verification_token_ttl_minutes
                ))
            })
    }
}

/// A TTL must be positive and yield a representable expiry date
fn checked_ttl(ttl: TimeDelta) -> Option<TimeDelta> {
    (ttl > TimeDelta::zero() && Utc::now().checked_add_signed(ttl).is_some()).then_some(ttl)
}

impl MailConfig {
    pub fn reset_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.reset_url).map_err(|e| {
            ConfigError::Message(format!("mail.reset_url is not a valid URL: {}", e))
        })
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would otherwise fail at request time
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.access_token_ttl()?;
        self.auth.verification_token_ttl()?;
        self.mail.reset_url()?;
        Ok(())
    }
}
