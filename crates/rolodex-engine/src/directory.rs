use rolodex_types::UserRecord;

use crate::navigator::{Controls, Step};
use crate::search;
use crate::{Error, IndexError, Result};

/// The single owned state of a browsing session.
///
/// Holds three overlapping views of the same batch:
/// - the full set, written once by [`Directory::populate`]
/// - the active view, an order-preserving subsequence selected by the query
/// - the cursor, a position inside the active view while a record is open
///
/// The active view is stored as positions into the full set and only ever
/// recomputed, never edited. Every query change clears the cursor so it can
/// never point into a view that no longer exists.
#[derive(Debug, Default)]
pub struct Directory {
    full_set: Vec<UserRecord>,
    populated: bool,
    query: Option<String>,
    view: Vec<usize>,
    cursor: Option<usize>,
}

impl Directory {
    /// Empty directory, as it exists before the startup fetch resolves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory over an already fetched batch.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            view: (0..records.len()).collect(),
            full_set: records,
            populated: true,
            query: None,
            cursor: None,
        }
    }

    /// One-time population from the data source.
    ///
    /// Resets the view to the full set and clears the query and cursor.
    pub fn populate(&mut self, records: Vec<UserRecord>) -> Result<()> {
        if self.populated {
            return Err(Error::AlreadyPopulated);
        }

        *self = Self::with_records(records);
        Ok(())
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn full_set(&self) -> &[UserRecord] {
        &self.full_set
    }

    /// Recompute the active view for `raw` and close any open record.
    ///
    /// The query is trimmed and lowercased first; a blank query restores the
    /// full set.
    pub fn apply_query(&mut self, raw: &str) {
        self.cursor = None;
        self.query = search::normalize_query(raw);
        self.view = search::filter(&self.full_set, raw);
    }

    /// The normalized query, or `None` when no search is active.
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Records of the active view in display order.
    pub fn active_view(&self) -> impl ExactSizeIterator<Item = &UserRecord> + '_ {
        self.view.iter().map(|&position| &self.full_set[position])
    }

    /// Record at `index` of the active view.
    pub fn record_at(&self, index: usize) -> Option<&UserRecord> {
        self.view
            .get(index)
            .map(|&position| &self.full_set[position])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The record currently open, if any.
    pub fn current(&self) -> Option<&UserRecord> {
        self.cursor.and_then(|index| self.record_at(index))
    }

    /// Open the record at `index` of the active view.
    pub fn open_at(&mut self, index: usize) -> std::result::Result<&UserRecord, IndexError> {
        let len = self.view.len();
        if index >= len {
            return Err(IndexError::OutOfBounds { index, len });
        }

        self.cursor = Some(index);
        Ok(&self.full_set[self.view[index]])
    }

    pub fn close(&mut self) {
        self.cursor = None;
    }

    /// Prev/next enablement for the open record, `None` while closed.
    pub fn controls(&self) -> Option<Controls> {
        self.cursor
            .map(|index| Controls::for_position(index, self.view.len()))
    }

    pub fn can_step(&self, step: Step) -> bool {
        self.controls().is_some_and(|controls| controls.allows(step))
    }

    /// Move the cursor one record in `step`'s direction.
    pub fn step(&mut self, step: Step) -> std::result::Result<&UserRecord, IndexError> {
        let Some(index) = self.cursor else {
            return Err(IndexError::NotOpen);
        };

        if !self.can_step(step) {
            return Err(match step {
                Step::Prev => IndexError::AtStart,
                Step::Next => IndexError::AtEnd,
            });
        }

        let next = match step {
            Step::Prev => index - 1,
            Step::Next => index + 1,
        };
        self.cursor = Some(next);
        Ok(&self.full_set[self.view[next]])
    }

    pub fn step_prev(&mut self) -> std::result::Result<&UserRecord, IndexError> {
        self.step(Step::Prev)
    }

    pub fn step_next(&mut self) -> std::result::Result<&UserRecord, IndexError> {
        self.step(Step::Next)
    }
}
