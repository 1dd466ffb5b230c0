pub mod batch;
pub mod user;

pub use batch::*;
pub use user::*;
