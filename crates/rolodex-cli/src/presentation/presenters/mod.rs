mod gallery;
mod modal;

pub use gallery::present_gallery;
pub use modal::{present_detail, present_modal};
