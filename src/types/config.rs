use serde::{Deserialize, Serialize};

/// Application shell configuration, stored as JSON in the user config dir.
///
/// Only the host window and logging are configured here; article settings
/// chosen in the panel are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub window: WindowConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            content: ContentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ArticleView".to_string(),
            width: 1440,
            height: 900,
            devtools: false,
        }
    }
}

/// Where the article text comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// Plain-text article file; the bundled article is shown when unset.
    pub article_path: Option<String>,
}

/// Log filter used when `ARTICLEVIEW_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
