pub mod config;
pub mod error;
pub mod loader;

pub use config::{resolve_workspace_path, Config, SourceConfig};
pub use error::{Error, Result};
pub use loader::{apply_batch, fetch, load_directory, BatchResult, Loader};
