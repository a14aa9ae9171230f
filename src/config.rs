use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::notify::NotifierConfig;

// Default configuration
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub base_url: String,
    pub page_size: u64,
    pub toast_ttl_secs: u64,
    /// Screen key to restore on startup.
    #[serde(default)]
    pub active_screen: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            toast_ttl_secs: DEFAULT_TOAST_TTL_SECS,
            active_screen: None,
        }
    }
}

impl Settings {
    /// Notifier options derived from the persisted settings.
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            toast_ttl: Duration::from_secs(self.toast_ttl_secs.max(1)),
            ..NotifierConfig::default()
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "mealdesk", "mealdesk-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!(error = %e, "failed to create config dir");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.page_size, DEFAULT_PAGE_SIZE);
        assert!(s.active_screen.is_none());
    }

    #[test]
    fn test_round_trip() {
        let s = Settings {
            base_url: "https://api.mealdesk.example".to_string(),
            page_size: 50,
            toast_ttl_secs: 6,
            active_screen: Some("subscriptions".to_string()),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, s.base_url);
        assert_eq!(back.page_size, 50);
        assert_eq!(back.active_screen.as_deref(), Some("subscriptions"));
    }

    #[test]
    fn test_active_screen_field_is_optional() {
        let back: Settings = serde_json::from_str(
            r#"{"base_url": "http://x", "page_size": 10, "toast_ttl_secs": 4}"#,
        )
        .unwrap();
        assert!(back.active_screen.is_none());
    }

    #[test]
    fn test_notifier_config_uses_ttl() {
        let s = Settings {
            toast_ttl_secs: 9,
            ..Settings::default()
        };
        assert_eq!(s.notifier_config().toast_ttl, Duration::from_secs(9));

        // Zero is clamped so toasts are never invisible.
        let s = Settings {
            toast_ttl_secs: 0,
            ..Settings::default()
        };
        assert_eq!(s.notifier_config().toast_ttl, Duration::from_secs(1));
    }
}
