/// Top-level error type. Every search and lookup returns this.
#[derive(Debug, thiserror::Error)]
pub enum ItunesError {
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("URL construction failed: {0}")]
    UrlConstruction(String),

    #[error("Network communication failed: {0}")]
    NetworkCommunication(String),

    #[error("No item matches id {id}")]
    NoMatchFound { id: u64 },
}

impl ItunesError {
    /// True for failures caused by how the request was configured. These are
    /// reported before any network traffic happens.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ItunesError::MissingRequiredParameter(_) | ItunesError::InvalidParameter(_)
        )
    }
}

impl From<url::ParseError> for ItunesError {
    fn from(e: url::ParseError) -> Self {
        ItunesError::UrlConstruction(e.to_string())
    }
}

impl From<reqwest::Error> for ItunesError {
    fn from(e: reqwest::Error) -> Self {
        ItunesError::NetworkCommunication(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ItunesError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
