//! Gallery Component
//!
//! Card grid with a keyboard highlight. The highlight is UI state; opening a
//! card goes through `Intent::SelectCard`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::hit;
use crate::binding::Intent;
use crate::presentation::view_models::GalleryViewModel;
use crate::presentation::views::gallery::{NOTHING_LOADED, NO_RESULTS};
use crate::presentation::views::tui::{CardView, PlaceholderView};

pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 5;

/// Actions the gallery hands to the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    Intent(Intent),
    FocusSearch,
    Quit,
}

/// Place `count` cards in a grid, starting at row `scroll_row`.
///
/// Returns the number of columns and the `(index, area)` of every visible card.
pub fn grid_layout(area: Rect, count: usize, scroll_row: usize) -> (usize, Vec<(usize, Rect)>) {
    let columns = usize::from((area.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    let cells = (0..count)
        .filter_map(|index| {
            let row = index / columns;
            if row < scroll_row || row >= scroll_row + visible_rows {
                return None;
            }
            let x = area.x + (index % columns) as u16 * CARD_WIDTH;
            let y = area.y + (row - scroll_row) as u16 * CARD_HEIGHT;
            let cell = Rect {
                x,
                y,
                width: CARD_WIDTH.min(area.x + area.width - x),
                height: CARD_HEIGHT.min(area.y + area.height - y),
            };
            Some((index, cell))
        })
        .collect();

    (columns, cells)
}

pub struct GalleryComponent {
    highlighted: Option<usize>,
    scroll_row: usize,
    columns: usize,
    visible_rows: usize,
    /// Areas of the cards drawn by the last render
    card_areas: Vec<(usize, Rect)>,
}

impl Default for GalleryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            highlighted: None,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
            card_areas: Vec::new(),
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    /// Forget highlight and scroll after the active view was recomputed.
    pub fn reset(&mut self) {
        self.highlighted = None;
        self.scroll_row = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<GalleryAction> {
        match key.code {
            KeyCode::Char('q') => Some(GalleryAction::Quit),
            KeyCode::Char('/') => Some(GalleryAction::FocusSearch),
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_by(1, data_len);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_by(-1, data_len);
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_by(self.columns as isize, data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_by(-(self.columns as isize), data_len);
                None
            }
            KeyCode::Home => {
                self.move_to(0, data_len);
                None
            }
            KeyCode::End => {
                self.move_to(data_len.saturating_sub(1), data_len);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self
                .highlighted
                .filter(|&index| index < data_len)
                .map(|index| GalleryAction::Intent(Intent::SelectCard(index))),
            _ => None,
        }
    }

    /// Map a click to the card drawn under it.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<Intent> {
        let index = self
            .card_areas
            .iter()
            .find(|(_, area)| hit(*area, column, row))
            .map(|(index, _)| *index)?;
        self.highlighted = Some(index);
        Some(Intent::SelectCard(index))
    }

    pub fn scroll(&mut self, rows: isize, data_len: usize) {
        let total_rows = data_len.div_ceil(self.columns.max(1));
        let max_scroll = total_rows.saturating_sub(self.visible_rows);
        self.scroll_row = self.scroll_row.saturating_add_signed(rows).min(max_scroll);
    }

    /// Render the grid and record card areas for hit testing.
    ///
    /// The highlight is clamped to the data and kept visible.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &GalleryViewModel) {
        let cards = data.cards();

        self.columns = usize::from((area.width / CARD_WIDTH).max(1));
        self.visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // Index Safety: Clamp highlight to data bounds
        if cards.is_empty() {
            self.highlighted = None;
            self.scroll_row = 0;
        } else if let Some(index) = self.highlighted
            && index >= cards.len()
        {
            self.highlighted = Some(cards.len() - 1);
        }
        if let Some(index) = self.highlighted {
            let row = index / self.columns;
            if row < self.scroll_row {
                self.scroll_row = row;
            } else if row >= self.scroll_row + self.visible_rows {
                self.scroll_row = row + 1 - self.visible_rows;
            }
        }

        match data {
            GalleryViewModel::NoResults { .. } => return self.render_message(f, area, NO_RESULTS),
            GalleryViewModel::Empty => return self.render_message(f, area, NOTHING_LOADED),
            GalleryViewModel::Cards { .. } => {}
        }

        self.card_areas.clear();
        let (_, cells) = grid_layout(area, cards.len(), self.scroll_row);
        for (index, cell) in cells {
            let highlighted = self.highlighted == Some(index);
            f.render_widget(CardView::new(&cards[index], highlighted), cell);
            self.card_areas.push((index, cell));
        }
    }

    /// Draw `message` instead of cards; nothing is clickable.
    pub fn render_message(&mut self, f: &mut Frame, area: Rect, message: &str) {
        self.card_areas.clear();
        f.render_widget(PlaceholderView::new(message), area);
    }

    fn move_by(&mut self, delta: isize, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = match self.highlighted {
            Some(index) => index.saturating_add_signed(delta).min(data_len - 1),
            None => 0,
        };
        self.highlighted = Some(next);
    }

    fn move_to(&mut self, index: usize, data_len: usize) {
        if data_len > 0 {
            self.highlighted = Some(index.min(data_len - 1));
        }
    }
}
