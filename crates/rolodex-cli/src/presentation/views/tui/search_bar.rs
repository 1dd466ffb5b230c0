use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SearchBarView<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> SearchBarView<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self { text, focused }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = if self.text.is_empty() && !self.focused {
            Line::styled("press / to search by name", Style::default().fg(Color::DarkGray))
        } else {
            let mut spans = vec![Span::raw(self.text)];
            if self.focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        };

        Paragraph::new(content)
            .block(
                Block::default()
                    .title("Search")
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .render(area, buf);
    }
}
