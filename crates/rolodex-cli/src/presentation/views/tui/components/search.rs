use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::binding::Intent;
use crate::presentation::views::tui::SearchBarView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Intent(Intent),
    /// Give focus back to the gallery
    Blur,
}

/// Search input. Every edit is a `ChangeQuery`; Enter is a `SubmitQuery`.
#[derive(Default)]
pub struct SearchComponent {
    text: String,
    area: Option<Rect>,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `(column, row)` falls on the input drawn by the last render.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| super::hit(area, column, row))
    }

    /// Returns the actions for one key press, in order.
    pub fn handle_input(&mut self, key: KeyEvent) -> Vec<SearchAction> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.push(c);
                vec![self.changed()]
            }
            KeyCode::Backspace => {
                if self.text.pop().is_some() {
                    vec![self.changed()]
                } else {
                    Vec::new()
                }
            }
            KeyCode::Enter => vec![
                SearchAction::Intent(Intent::SubmitQuery(self.text.clone())),
                SearchAction::Blur,
            ],
            KeyCode::Esc => vec![SearchAction::Blur],
            _ => Vec::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        f.render_widget(SearchBarView::new(&self.text, focused), area);
        self.area = Some(area);
    }

    fn changed(&self) -> SearchAction {
        SearchAction::Intent(Intent::ChangeQuery(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_emits_live_queries() {
        let mut search = SearchComponent::new();
        search.handle_input(KeyEvent::from(KeyCode::Char('j')));
        let actions = search.handle_input(KeyEvent::from(KeyCode::Char('o')));

        assert_eq!(
            actions,
            vec![SearchAction::Intent(Intent::ChangeQuery("jo".to_string()))]
        );
        assert_eq!(
            search.handle_input(KeyEvent::from(KeyCode::Backspace)),
            vec![SearchAction::Intent(Intent::ChangeQuery("j".to_string()))]
        );
    }

    #[test]
    fn test_backspace_on_empty_input_does_nothing() {
        let mut search = SearchComponent::new();
        assert!(search.handle_input(KeyEvent::from(KeyCode::Backspace)).is_empty());
    }

    #[test]
    fn test_enter_submits_and_blurs() {
        let mut search = SearchComponent::new();
        search.handle_input(KeyEvent::from(KeyCode::Char('x')));

        assert_eq!(
            search.handle_input(KeyEvent::from(KeyCode::Enter)),
            vec![
                SearchAction::Intent(Intent::SubmitQuery("x".to_string())),
                SearchAction::Blur
            ]
        );
        assert_eq!(search.text(), "x");
    }
}
