pub mod common;
pub mod gallery;
pub mod modal;

pub use common::*;
pub use gallery::*;
pub use modal::*;
