use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::ModalViewModel;

/// Body of the modal: everything except the controls.
pub struct DetailView<'a> {
    model: &'a ModalViewModel,
}

impl<'a> DetailView<'a> {
    pub fn new(model: &'a ModalViewModel) -> Self {
        Self { model }
    }

    pub const HEIGHT: u16 = 9;
}

impl<'a> Widget for DetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.model;
        let label = Style::default().fg(Color::DarkGray);

        let lines = vec![
            Line::styled(
                vm.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(vm.email.clone(), Style::default().fg(Color::Cyan)),
            Line::from(vm.city.clone()),
            Line::styled("─".repeat(area.width as usize), label),
            Line::from(vec![Span::styled("Phone    ", label), Span::raw(vm.phone.clone())]),
            Line::from(vec![Span::styled("Address  ", label), Span::raw(vm.address.clone())]),
            Line::from(vec![Span::styled("         ", label), Span::raw(vm.region.clone())]),
            Line::from(vec![Span::styled("Birthday ", label), Span::raw(vm.birthday.clone())]),
            Line::styled(format!("{} of {}", vm.index + 1, vm.total), label),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

/// A modal control. Disabled buttons are drawn dimmed.
pub struct ControlButton<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
}

impl<'a> ControlButton<'a> {
    pub fn new(label: &'a str, enabled: bool, focused: bool) -> Self {
        Self {
            label,
            enabled,
            focused,
        }
    }
}

impl<'a> Widget for ControlButton<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match (self.enabled, self.focused) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Cyan),
        };

        Paragraph::new(format!("[ {} ]", self.label))
            .style(style)
            .render(area, buf);
    }
}
