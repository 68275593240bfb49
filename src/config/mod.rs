use std::path::Path;

use serde::Deserialize;

use crate::constants::DEFAULT_SERVER_URL;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/waxchat/config.toml, the
/// WAXCHAT_SERVER_URL environment variable, and CLI flags (in that order).
#[derive(Debug, Clone)]
pub struct Config {
    /// Assistant server base URL.
    pub server_url: String,
    /// Theme name (built-in or "custom").
    pub theme: String,
    /// UI language (en, es).
    pub lang: String,
    /// Preset user name, sent with every request when set.
    pub user_name: Option<String>,
    /// Whether to show the WAXBOT greeting at startup.
    pub show_greeting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            theme: "blossom".to_string(),
            lang: "en".to_string(),
            user_name: None,
            show_greeting: true,
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    server_url: Option<String>,
    theme: Option<String>,
    lang: Option<String>,
    user_name: Option<String>,
    show_greeting: Option<bool>,
}

impl Config {
    /// Load config from ~/.config/waxchat/config.toml, falling back to
    /// defaults for any missing fields, then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::from_file(&crate::constants::config_file_path());
        config.apply_env();
        config
    }

    /// Parse `path` and merge its values over defaults. A missing file
    /// means pure defaults; a malformed file warns and keeps defaults.
    fn from_file(path: &Path) -> Self {
        let mut config = Config::default();

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return config, // No config file, use defaults
        };

        let file_config: FileConfig = match toml::from_str(&content) {
            Ok(fc) => fc,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                tracing::warn!("config parse failed: {}", e);
                return config;
            }
        };

        // Merge file values over defaults
        if let Some(v) = file_config.server_url {
            if !v.is_empty() {
                config.server_url = v;
            }
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.lang {
            if !v.is_empty() {
                config.lang = v;
            }
        }
        if let Some(v) = file_config.user_name {
            if !v.is_empty() {
                config.user_name = Some(v);
            }
        }
        if let Some(v) = file_config.show_greeting {
            config.show_greeting = v;
        }

        config
    }

    /// Environment overrides (loaded from ~/.config/waxchat/.env via dotenvy).
    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("WAXCHAT_SERVER_URL") {
            if !v.is_empty() {
                self.server_url = v;
            }
        }
    }
}
