use std::env;

use auth::AuthSettings;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use secrecy::SecretString;
use serde::Deserialize;
use serde::Deserializer;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,
    pub token_lifetime_seconds: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub hash_cost: u32,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH_DATABASE__URL, AUTH_JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults for everything except the database url and JWT secret
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8081)?
            .set_default(
                "jwt.token_lifetime_seconds",
                AuthSettings::DEFAULT_TOKEN_LIFETIME_HOURS * 60 * 60,
            )?
            .set_default("password.hash_cost", AuthSettings::DEFAULT_HASH_COST)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    /// Settings for the credential core built from the `jwt` and `password` sections.
    ///
    /// # Errors
    /// * `Message` - `jwt.token_lifetime_seconds` is not positive or out of range
    pub fn auth_settings(&self) -> Result<AuthSettings, ConfigError> {
        let seconds = self.jwt.token_lifetime_seconds;
        let token_lifetime = Duration::try_seconds(seconds)
            .filter(|lifetime| *lifetime > Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.token_lifetime_seconds must be a positive number of seconds, got {}",
                    seconds
                ))
            })?;

        Ok(AuthSettings {
            signing_secret: self.jwt.secret.clone(),
            hash_cost: self.password.hash_cost,
            token_lifetime,
        })
    }
}
