//! Stateful browser components.
//!
//! Each component owns its UI state privately, translates raw input into a
//! [`crate::binding::Intent`] (or a component-level action), and records the
//! screen areas it drew so that mouse clicks hit exactly what was rendered.

mod gallery;
mod modal;
mod search;

pub use gallery::{grid_layout, GalleryAction, GalleryComponent, CARD_HEIGHT, CARD_WIDTH};
pub use modal::{ModalComponent, ModalControl};
pub use search::{SearchAction, SearchComponent};

use ratatui::layout::Rect;

pub(crate) fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
