use rolodex_types::UserRecord;

use crate::Result;

/// Where the startup batch comes from.
///
/// Responsibilities:
/// - Issue exactly one request per call, no retries
/// - Return records in the order the source delivered them
/// - Map failures onto `FetchError::Transport` / `FetchError::Parse`
pub trait DataSource: Send + Sync {
    /// Human-readable origin for logs and status lines (URL or path)
    fn describe(&self) -> String;

    /// Retrieve the batch.
    fn fetch_batch(&self) -> Result<Vec<UserRecord>>;
}
