// Engine module - the UI-free core of the directory browser.
// Owns the fetched batch, the search-filtered view and the modal cursor.
// Presentation and input bindings live in the CLI crate and only reach the
// state through the operations exposed here.

mod directory;
mod error;
pub mod format;
mod navigator;
pub mod search;

pub use directory::Directory;
pub use error::{Error, IndexError, Result};
pub use format::{format_date, format_phone};
pub use navigator::{transition, Controls, ModalState, Step, Transition};
