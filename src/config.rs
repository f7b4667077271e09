//! Server startup configuration.
//!
//! Bind address and CORS origins are explicit values handed to the API
//! layer at startup, not module-level state.

use std::net::SocketAddr;

use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "PASSGUARD_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "./passguard.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8001)),
            allowed_origins: vec![
                "http://localhost:5000".to_string(),
                "http://127.0.0.1:5000".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the TOML file named by `PASSGUARD_CONFIG_PATH`
    /// (default `./passguard.toml`). A missing file yields the defaults;
    /// an unreadable or invalid file is an error.
    pub fn load() -> eyre::Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(buf) => Ok(toml::from_str(&buf)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
