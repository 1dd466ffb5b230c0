// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Source implementations
pub mod file;
pub mod http;

pub use error::{FetchError, Result};
pub use file::FileSource;
pub use http::{HttpSource, decode_batch};
pub use traits::DataSource;
