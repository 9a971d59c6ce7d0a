pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message suitable for an `ActionResult` or a toast body.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::NotFound(msg) => msg.clone(),
            Error::Validation(msg) => msg.clone(),
            Error::Unauthorized(msg) if !msg.is_empty() => msg.clone(),
            Error::Unauthorized(_) => "Session expired, please sign in again".to_string(),
            Error::Reqwest(err) if err.is_timeout() => "Request timed out".to_string(),
            Error::Reqwest(_) => "Network error, please try again".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}
