// rolodex: a terminal directory browser.
//
// One batch of profiles is fetched at startup and held in a single owned
// `Directory` (rolodex-engine). Everything a user can do is one of three
// intents - select a card, change the query, or drive the modal - and all of
// them enter the state through `binding::dispatch`, whether they come from
// the keyboard, the mouse, or a console subcommand.

mod args;
pub mod binding;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
