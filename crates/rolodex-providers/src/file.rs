use rolodex_types::UserRecord;
use std::path::PathBuf;

use crate::http::decode_batch;
use crate::{DataSource, Result};

/// A saved API response on disk, same `{ "results": [...] }` envelope.
///
/// Used for demos and tests where the network is not available.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_batch(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(path = %self.path.display(), "reading batch file");
        let body = std::fs::read(&self.path)?;
        decode_batch(&body)
    }
}
