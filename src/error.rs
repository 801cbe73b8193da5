use std::fmt;

/// Custom error type for UI helper operations
#[derive(Debug)]
pub enum UiError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON parsing error
    Json(String),
    /// Terminal prompt failed
    Dialog(String),
    /// Writing to the terminal failed
    Io(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Http(e) => write!(f, "HTTP request failed: {}", e),
            UiError::Json(msg) => write!(f, "JSON error: {}", msg),
            UiError::Dialog(msg) => write!(f, "Prompt failed: {}", msg),
            UiError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UiError {
    fn from(err: reqwest::Error) -> Self {
        UiError::Http(err)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Json(err.to_string())
    }
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for UiError {
    fn from(err: dialoguer::Error) -> Self {
        UiError::Dialog(err.to_string())
    }
}

/// Result type alias for UI helper operations
pub type Result<T> = std::result::Result<T, UiError>;
