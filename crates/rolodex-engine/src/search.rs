//! Name search over a batch of records.

use rolodex_types::UserRecord;

/// Trim and lowercase a raw query.
///
/// Returns `None` when nothing is left, which means "search inactive" rather
/// than "match nothing".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `record`'s "first last" name contains an already-normalized query.
pub fn matches(record: &UserRecord, normalized: &str) -> bool {
    record.full_name().to_lowercase().contains(normalized)
}

/// Positions in `records` whose name matches `query`, in original order.
///
/// This is the active view the directory keeps: an inactive query selects
/// every position.
pub fn filter(records: &[UserRecord], query: &str) -> Vec<usize> {
    match normalize_query(query) {
        None => (0..records.len()).collect(),
        Some(needle) => records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(record, &needle))
            .map(|(position, _)| position)
            .collect(),
    }
}
