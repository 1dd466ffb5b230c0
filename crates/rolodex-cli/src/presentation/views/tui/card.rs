use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CardViewModel;

/// One gallery card.
pub struct CardView<'a> {
    card: &'a CardViewModel,
    highlighted: bool,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a CardViewModel, highlighted: bool) -> Self {
        Self { card, highlighted }
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.highlighted {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.highlighted {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        let lines = vec![
            Line::styled(
                self.card.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.card.email.clone(), Style::default().fg(Color::Cyan)),
            Line::styled(self.card.state.clone(), Style::default().fg(Color::Gray)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Non-selectable message shown in place of the cards.
pub struct PlaceholderView<'a> {
    message: &'a str,
}

impl<'a> PlaceholderView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for PlaceholderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
