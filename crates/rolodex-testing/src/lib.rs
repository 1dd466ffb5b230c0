//! Testing infrastructure for rolodex tests.
//!
//! This crate provides:
//! - `fixtures`: deterministic profile records and batch files
//! - `assertions`: checks against the CLI's JSON output
//! - `TestWorld`: an isolated data dir plus a batch file to point the CLI at

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
