use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub settings_path: PathBuf,
    pub clipboard_command: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let settings_path = match env::var("PAGESUM_SETTINGS_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_settings_path()
                .ok_or_else(|| "PAGESUM_SETTINGS_PATH: no config directory available".to_string())?,
        };

        Ok(Self {
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            settings_path,
            clipboard_command: env::var("PAGESUM_CLIPBOARD_CMD").ok(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            settings_path: default_settings_path()
                .unwrap_or_else(|| PathBuf::from("pagesum-settings.json")),
            clipboard_command: None,
        }
    }
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagesum").join("settings.json"))
}
