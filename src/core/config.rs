use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".run-analyzer.yml";

/// Project-level defaults, overridden by command-line flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub executable: Option<PathBuf>,
    pub declarations: Option<PathBuf>,
    pub compilation_database: Option<bool>,
}

impl Config {
    pub fn load(project_path: &Path) -> Self {
        let config_path = project_path.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_yaml::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Ignoring invalid {}: {}", config_path.display(), e);
                    }
                },
                Err(e) => {
                    log::warn!("Unable to read {}: {}", config_path.display(), e);
                }
            }
        }
        Config::default()
    }
}
