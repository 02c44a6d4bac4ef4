//! Server configuration options.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};

use royale_client::config::ApiConfig;

use serde::{Deserialize, Serialize};

/// The default host the server is bound to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The default port the server is hosted on.
pub const DEFAULT_PORT: u16 = 8000;

/// The default path the MCP endpoint is mounted at.
pub const DEFAULT_PATH: &str = "/mcp";

/// Server configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    /// API access configuration.
    pub api: ApiConfig,
}

impl Config {
    /// Loads a config from the environment and a given config path.
    ///
    /// A missing config file is not an error; defaults and the environment
    /// fill in for it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ROYALE_").split("__"))
            .merge(
                Env::raw()
                    .only(&["PORT"])
                    .map(|k| Uncased::from(format!("SERVER.{}", k))),
            )
            .merge(Env::raw().only(&["API_KEY", "API_ENDPOINT"]).map(|k| {
                if k == "API_KEY" {
                    Uncased::from("API.KEY")
                } else if k == "API_ENDPOINT" {
                    Uncased::from("API.ENDPOINT")
                } else {
                    k.into()
                }
            }))
            .extract()
    }
}

/// HTTP transport config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// The address the server is binded to.
    pub host: String,
    /// The port the server is binded to.
    pub port: u16,
    /// Where the MCP endpoint is mounted.
    pub path: String,
}

impl ServerConfig {
    /// The mount path, with a leading `/`.
    pub fn mount_path(&self) -> String {
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_owned(),
        }
    }
}
