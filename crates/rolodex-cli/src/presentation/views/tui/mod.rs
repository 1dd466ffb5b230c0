//! Ratatui widgets for the browser.
//!
//! Widgets are stateless: they draw a ViewModel into a buffer. Selection,
//! focus and hit areas belong to the components in [`components`].

pub mod components;
mod card;
mod detail;
mod search_bar;

pub use card::{CardView, PlaceholderView};
pub use detail::{ControlButton, DetailView};
pub use search_bar::SearchBarView;

use ratatui::layout::Rect;

/// Rectangle of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 60, 14), Rect::new(10, 5, 60, 14));
        assert_eq!(centered(Rect::new(2, 1, 20, 10), 60, 14), Rect::new(2, 1, 20, 10));
    }
}
