//! # Presentation Layer
//!
//! MVVM-style split between what is shown and how it is shown.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                       (Data)                           ==(Text)==> [ View ]
//!
//! [ TUI Router ] --> [ Presenter ] --> [ ViewModel ] --> [ Component ] <-- User Input
//!                                                         (State + Hit areas)
//!                                                              |
//!                                                              v
//!                                                          [ View ] (Widget)
//! ```
//!
//! ## Rules
//!
//! 1. **Presenters are pure.** `Directory` in, ViewModel out. They decide what
//!    is visible (cards vs. the no-results placeholder, which modal controls
//!    are enabled) and nothing else.
//! 2. **ViewModels are snapshots.** Serializable, no behaviour. JSON output is
//!    a dump of the ViewModel.
//! 3. **Components own UI state, not domain state.** Highlighted card, focused
//!    control and hit-test areas live in components; the cursor and the query
//!    live in the `Directory`. Components emit `binding::Intent`s and never
//!    mutate the directory themselves.
//! 4. **The router delegates.** It picks the component that owns the input,
//!    forwards the resulting intent to `binding::dispatch`, and re-renders.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CreateView, DisplayOptions};
