use std::fmt;

/// Result type for rolodex-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected cursor operations.
///
/// Returning one of these always means the directory was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// `open_at` with a position outside the active view
    OutOfBounds { index: usize, len: usize },

    /// A step was requested while no record is open
    NotOpen,

    /// `Prev` at the first record of the view
    AtStart,

    /// `Next` at the last record of the view
    AtEnd,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::OutOfBounds { index, len } => {
                write!(f, "index {} is out of range for {} records", index, len)
            }
            IndexError::NotOpen => write!(f, "no record is open"),
            IndexError::AtStart => write!(f, "already at the first record"),
            IndexError::AtEnd => write!(f, "already at the last record"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// The full set is written once per session
    AlreadyPopulated,

    /// Cursor operation rejected
    Index(IndexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyPopulated => write!(f, "directory has already been populated"),
            Error::Index(err) => write!(f, "Navigation error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::AlreadyPopulated => None,
            Error::Index(err) => Some(err),
        }
    }
}

impl From<IndexError> for Error {
    fn from(err: IndexError) -> Self {
        Error::Index(err)
    }
}
