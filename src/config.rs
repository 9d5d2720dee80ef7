use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

const fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let port = match env::var("PORT") {
        Ok(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?,
        Err(_) => default_port(),
    };

    let database_url =
        env::var("DATABASE_URL").map_err(|_| "DATABASE_URL environment variable is required")?;

    let static_dir = env::var("STATIC_DIR").map_or_else(|_| default_static_dir(), PathBuf::from);

    Ok(Config {
        port,
        database_url,
        static_dir,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("NOTES_API_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try config file
    if Path::new(&config_path).exists() {
        let contents = fs::read_to_string(&config_path)?;
        return Config::from_yaml(&contents).map_err(Into::into);
    }

    // Fallback to environment variables
    tracing::info!(
        "Config file '{}' not found, loading configuration from environment variables",
        config_path
    );
    load_from_env()
}
