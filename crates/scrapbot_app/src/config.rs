use std::fs;
use std::path::Path;

use client_logging::{client_info, client_warn};
use scrapbot_core::DEFAULT_MAX_DEPTH;
use scrapbot_gateway::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = ".scrapbot.ron";

/// Persisted client configuration: backend endpoint plus the last-used
/// input values, reloaded as defaults on the next run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub url: String,
    pub max_depth: u32,
    pub question: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            url: "https://quotes.toscrape.com/".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            question: String::new(),
        }
    }
}

/// Loads `.scrapbot.ron` from the working directory. A missing, unreadable
/// or unparsable file yields the defaults.
pub fn load() -> AppConfig {
    load_from(Path::new("."))
}

fn load_from(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            client_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            client_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            client_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

/// Writes the config back to the working directory. Failures are logged and
/// otherwise ignored; losing the file only loses remembered inputs.
pub fn save(config: &AppConfig) {
    save_to(Path::new("."), config);
}

fn save_to(dir: &Path, config: &AppConfig) {
    let path = dir.join(CONFIG_FILENAME);
    match ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default()) {
        Ok(text) => {
            if let Err(err) = fs::write(&path, text) {
                client_warn!("Failed to write config to {:?}: {}", path, err);
            }
        }
        Err(err) => {
            client_warn!("Failed to serialize config: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_from, save_to, AppConfig, CONFIG_FILENAME};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_from(dir.path()), AppConfig::default());
    }

    #[test]
    fn config_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            base_url: "http://backend.internal:8000".to_string(),
            url: "https://example.com/docs".to_string(),
            max_depth: 3,
            question: "what is this?".to_string(),
        };

        save_to(dir.path(), &config);
        assert_eq!(load_from(dir.path()), config);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILENAME), "not ron at all {{{").expect("write");

        assert_eq!(load_from(dir.path()), AppConfig::default());
    }
}
