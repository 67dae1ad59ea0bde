use std::fmt;

// === PanelError ===

/// Contract violations reported by the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The field name is not one of the five article settings.
    UnknownField(String),
    /// The value is not a member of the field's option table.
    UnknownOption { field: String, value: String },
    /// The operation needs an open panel.
    NotOpen,
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::UnknownField(name) => write!(f, "Unknown settings field: {}", name),
            PanelError::UnknownOption { field, value } => {
                write!(f, "Unknown option for {}: {}", field, value)
            }
            PanelError::NotOpen => write!(f, "Settings panel is not open"),
        }
    }
}

impl std::error::Error for PanelError {}

// === ConfigError ===

/// Errors related to the application config file.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the config.
    SerializationError(String),
    /// The provided config key or value is invalid.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// === ContentError ===

/// Errors related to loading article content.
#[derive(Debug)]
pub enum ContentError {
    /// The article file could not be read.
    IoError(String),
    /// The article file has no title or no body.
    Empty(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::IoError(msg) => write!(f, "Article I/O error: {}", msg),
            ContentError::Empty(path) => write!(f, "Article has no content: {}", path),
        }
    }
}

impl std::error::Error for ContentError {}

// === UiError ===

/// Errors raised while bringing up the native window.
#[derive(Debug)]
pub enum UiError {
    /// The host window could not be created.
    Window(String),
    /// The WebView could not be created or attached.
    WebView(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Window(msg) => write!(f, "Window error: {}", msg),
            UiError::WebView(msg) => write!(f, "WebView error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
