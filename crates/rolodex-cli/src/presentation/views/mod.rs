// Views turn ViewModels into output: fmt::Display for the console,
// ratatui widgets for the browser.

pub mod gallery;
pub mod modal;
pub mod tui;

pub use gallery::GalleryView;
pub use modal::ModalView;
