use crate::error::AppError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_COOLDOWN: u64 = 300;
pub const DEFAULT_REGION: &str = "EUW";
pub const DEFAULT_QUERY_TYPE: &str = "featured";

#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub query_type: String,
    pub forced_cooldown: Option<u64>,
    pub api_key_path: PathBuf,
    pub custom_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            region: DEFAULT_REGION.to_string(),
            query_type: DEFAULT_QUERY_TYPE.to_string(),
            forced_cooldown: None,
            api_key_path: default_key_path(),
            custom_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        if let Ok(region) = env::var("FEATURED_REGION") {
            config.region = region;
        }
        if let Ok(path) = env::var("FEATURED_API_KEY_PATH") {
            config.api_key_path = PathBuf::from(path);
        }

        config
    }
}

pub fn default_key_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".featured_scout")
        .join("api_key")
}

/// Reads the API key from the first line of the file, trimmed.
pub fn read_api_key(path: &Path) -> Result<String, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("{}: {}", path.display(), e)))?;

    Ok(content.lines().next().unwrap_or("").trim().to_string())
}
