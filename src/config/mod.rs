// Configuration module entry point
// Manages application configuration and shared runtime state

mod types;

use std::net::SocketAddr;

pub use types::{Config, StaticConfig};

use crate::store::TaskStore;

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Layering: built-in defaults, then the optional config file, then
    /// `TASKBOARD_*` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("TASKBOARD"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("storage.tasks_file", "data/tasks.json")?
            .set_default("static.frontend_dir", "frontend")?
            .set_default("static.styles_dir", "styles")?
            .set_default("static.index_file", "index.html")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: configuration plus the task store
pub struct AppState {
    pub config: Config,
    pub store: TaskStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TaskStore::new(config.storage.tasks_file.as_str()),
            config: config.clone(),
        }
    }
}
