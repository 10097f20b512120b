//! Configuration for hab, from ~/.config/hab/config.toml and `HAB_*` env vars.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{HabError, HabResult};

static DEFAULT_DATA_FILE: &str = "~/.hab/appointments.json";
static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HabConfig {
    /// JSON document holding every appointment
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HabConfig {
    fn default() -> Self {
        HabConfig {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HabConfig {
    pub fn config_path() -> HabResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HabError::Config("Could not determine config directory".into()))?
            .join("hab");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the user config file, writing a commented default one first
    /// if it does not exist yet.
    pub fn load() -> HabResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) layered under `HAB_*` environment variables.
    pub fn load_from(path: &Path) -> HabResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("HAB").try_parsing(true))
            .build()
            .map_err(|e| HabError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HabError::Config(e.to_string()))
    }

    /// The data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn socket_addr(&self) -> HabResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| HabError::Config(format!("Invalid host '{}': {e}", self.host)))?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HabResult<()> {
        let contents = format!(
            "\
# hab configuration

# Where appointments are stored:
# data_file = \"{}\"

# Address the HTTP server listens on:
# host = \"{}\"
# port = {}
",
            DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HabError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HabError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
