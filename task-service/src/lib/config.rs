use std::env;

use auth::Authenticator;
use auth::JwtError;
use auth::JwtKeys;
use config::builder::DefaultState;
use config::Config as RawConfig;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Signing secret used when none is configured. Only suitable for local
/// development; the server logs a warning whenever it is in effect.
pub const DEVELOPMENT_JWT_SECRET: &str = "your_default_secret_for_dev";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
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

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: String,
    pub expiration_minutes: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl JwtConfig {
    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEVELOPMENT_JWT_SECRET
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.expiration_minutes)
    }

    /// Build the process-wide authenticator from this configuration.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - `algorithm` is not an HMAC identifier
    /// * `EmptySecret` - `secret` is empty
    pub fn authenticator(&self) -> Result<Authenticator, JwtError> {
        let keys = JwtKeys::from_config(&self.secret, &self.algorithm)?;
        Ok(Authenticator::new(keys, self.token_ttl()))
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"));

        Self::from_builder(builder)
    }

    /// Built-in defaults every other source layers on top of.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        RawConfig::builder()
            .set_default("database.max_connections", 5_i64)?
            .set_default("server.http_port", 8000_i64)?
            .set_default("jwt.secret", DEVELOPMENT_JWT_SECRET)?
            .set_default("jwt.algorithm", "HS256")?
            .set_default("jwt.expiration_minutes", 30_i64)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn test_defaults_apply() {
        let builder = Config::defaults()
            .unwrap()
            .set_override("database.url", "postgresql://localhost/tasks")
            .unwrap();

        let config = Config::from_builder(builder).unwrap();

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.http_port, 8000);
        assert_eq!(config.jwt.algorithm, "HS256");
        assert_eq!(config.jwt.expiration_minutes, 30);
        assert!(config.jwt.uses_development_secret());
        assert_eq!(config.jwt.token_ttl(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [database]
            url = "postgresql://db/tasks"

            [jwt]
            secret = "production_secret_value_of_32_bytes"
            algorithm = "HS512"
            expiration_minutes = 15
        "#;

        let builder = Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));

        let config = Config::from_builder(builder).unwrap();

        assert!(!config.jwt.uses_development_secret());
        assert_eq!(config.jwt.expiration_minutes, 15);
        assert!(config.jwt.authenticator().is_ok());
    }

    #[test]
    fn test_missing_database_url_fails() {
        let result = Config::from_builder(Config::defaults().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_asymmetric_algorithm_rejected() {
        let jwt = JwtConfig {
            secret: "secret".to_string(),
            algorithm: "RS256".to_string(),
            expiration_minutes: 30,
        };

        assert!(matches!(
            jwt.authenticator(),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let jwt = JwtConfig {
            secret: "very_private".to_string(),
            algorithm: "HS256".to_string(),
            expiration_minutes: 30,
        };

        assert!(!format!("{:?}", jwt).contains("very_private"));
    }
}
