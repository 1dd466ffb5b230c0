use std::fmt;

/// Result type for rolodex-providers operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Why a batch could not be delivered.
///
/// There are no retries: either error leaves the directory empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure, non-success status, or unreadable file
    Transport(String),

    /// The body could not be decoded into a batch
    Parse(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Parse(_) => "parse",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<rolodex_types::Error> for FetchError {
    fn from(err: rolodex_types::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
