use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub yoco: YocoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path on the club site the checkout callback URLs point back to.
    /// The full URLs are derived from the requesting host at checkout time.
    pub return_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct YocoConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.return_path", "/book")?
            .set_default("database.url", "sqlite://courtside.db")?
            .set_default("database.max_connections", 10)?
            .set_default("yoco.api_base", "https://online.yoco.com/v1")?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with COURTSIDE__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("COURTSIDE").separator("__"))

            .build()?;

        // No default for yoco.secret_key: deserialization fails if it is
        // missing, and the process must not come up without it.
        config.try_deserialize()
    }
}
