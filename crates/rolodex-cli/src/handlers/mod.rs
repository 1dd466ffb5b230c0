mod context;

pub mod browse;
pub mod config;
pub mod list;
pub mod show;

pub use context::HandlerContext;
