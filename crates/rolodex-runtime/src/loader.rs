//! Startup batch loading.
//!
//! The fetch is the only suspension point of a session. Interactive callers
//! run it on a background thread with [`Loader::spawn`] and keep handling
//! input until the result arrives on the channel; console callers use
//! [`load_directory`] and block.

use rolodex_engine::Directory;
use rolodex_providers::{DataSource, FetchError};
use rolodex_types::UserRecord;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::Result;

pub type BatchResult = std::result::Result<Vec<UserRecord>, FetchError>;

/// Fetch once from `source`, logging the attempt and its outcome.
pub fn fetch(source: &dyn DataSource) -> BatchResult {
    let origin = source.describe();
    tracing::info!(source = %origin, "fetching batch");

    match source.fetch_batch() {
        Ok(records) => {
            tracing::info!(source = %origin, count = records.len(), "batch loaded");
            Ok(records)
        }
        Err(err) => {
            tracing::warn!(source = %origin, kind = err.kind(), error = %err, "batch fetch failed");
            Err(err)
        }
    }
}

/// Populate `directory` from a finished fetch.
///
/// Returns the number of records loaded. A failed fetch leaves the
/// directory empty and is handed back for reporting.
pub fn apply_batch(directory: &mut Directory, result: BatchResult) -> Result<usize> {
    let records = result?;
    let count = records.len();
    directory.populate(records)?;
    Ok(count)
}

/// Blocking fetch into a fresh directory.
///
/// Failures are logged and yield an empty directory, the same state an
/// interactive session shows when its fetch fails.
pub fn load_directory(source: &dyn DataSource) -> Directory {
    match fetch(source) {
        Ok(records) => Directory::with_records(records),
        Err(err) => {
            tracing::warn!(error = %err, "continuing with an empty directory");
            Directory::new()
        }
    }
}

/// Runs the startup fetch off the event-loop thread.
pub struct Loader;

impl Loader {
    /// Start the fetch; exactly one result is sent on the returned channel.
    pub fn spawn(source: Box<dyn DataSource>) -> Receiver<BatchResult> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetch(source.as_ref());
            // The receiver is gone when the user quit before the fetch resolved.
            let _ = tx.send(result);
        });

        rx
    }
}
