use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    100
}
fn default_min_connections() -> u32 {
    5
}

/// Client-facing application settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientAppConfig {
    /// Name used to build the `X-{name}-alert` / `X-{name}-params` headers.
    pub name: String,
}

impl Default for ClientAppConfig {
    fn default() -> Self {
        Self {
            name: "blogApp".into(),
        }
    }
}

/// Page size limits applied to list endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    /// Page size used when the request omits `size` or sends 0. Default: 20.
    #[serde(default = "default_page_size")]
    pub default_size: u64,
    /// Requests above this size are clamped. Default: 2000.
    #[serde(default = "default_max_page_size")]
    pub max_size: u64,
}

fn default_page_size() -> u64 {
    20
}
fn default_max_page_size() -> u64 {
    2000
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub app: ClientAppConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 1800)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., BLOG__DATABASE__URL)
            .add_source(Environment::with_prefix("BLOG").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
