//! Modal Component
//!
//! Detail overlay with prev/close/next controls. Keyboard focus moves only
//! among enabled controls; disabled controls are drawn but never recorded
//! as click targets.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};
use rolodex_engine::{Controls, Step};

use super::hit;
use crate::binding::{Intent, ModalAction};
use crate::presentation::view_models::ModalViewModel;
use crate::presentation::views::modal::{CLOSE_LABEL, NEXT_LABEL, PREV_LABEL};
use crate::presentation::views::tui::{centered, ControlButton, DetailView};

const PANEL_WIDTH: u16 = 60;
const BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Prev,
    Close,
    Next,
}

impl ModalControl {
    const ORDER: [ModalControl; 3] = [ModalControl::Prev, ModalControl::Close, ModalControl::Next];

    pub fn action(self) -> ModalAction {
        match self {
            ModalControl::Prev => ModalAction::Step(Step::Prev),
            ModalControl::Close => ModalAction::Close,
            ModalControl::Next => ModalAction::Step(Step::Next),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModalControl::Prev => PREV_LABEL,
            ModalControl::Close => CLOSE_LABEL,
            ModalControl::Next => NEXT_LABEL,
        }
    }

    pub fn is_enabled(self, controls: Controls) -> bool {
        match self {
            ModalControl::Prev => controls.prev,
            ModalControl::Close => true,
            ModalControl::Next => controls.next,
        }
    }
}

fn enabled(controls: Controls) -> Vec<ModalControl> {
    ModalControl::ORDER
        .into_iter()
        .filter(|control| control.is_enabled(controls))
        .collect()
}

pub struct ModalComponent {
    focus: ModalControl,
    /// Areas of the enabled controls drawn by the last render
    control_areas: Vec<(ModalControl, Rect)>,
}

impl Default for ModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalComponent {
    pub fn new() -> Self {
        Self {
            focus: ModalControl::Close,
            control_areas: Vec::new(),
        }
    }

    pub fn focus(&self) -> ModalControl {
        self.focus
    }

    /// Keep focus on an enabled control, falling back to Close.
    pub fn clamp_focus(&mut self, controls: Controls) {
        if !self.focus.is_enabled(controls) {
            self.focus = ModalControl::Close;
        }
    }

    /// Called when the modal opens from the gallery.
    pub fn reset(&mut self) {
        self.focus = ModalControl::Close;
        self.control_areas.clear();
    }

    pub fn handle_input(&mut self, key: KeyEvent, controls: Controls) -> Option<Intent> {
        match key.code {
            KeyCode::Esc => Some(Intent::Modal(ModalAction::Close)),
            KeyCode::Tab | KeyCode::Right => {
                self.cycle(controls, 1);
                None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.cycle(controls, -1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.clamp_focus(controls);
                Some(Intent::Modal(self.focus.action()))
            }
            _ => None,
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<Intent> {
        let control = self
            .control_areas
            .iter()
            .find(|(_, area)| hit(*area, column, row))
            .map(|(control, _)| *control)?;
        self.focus = control;
        Some(Intent::Modal(control.action()))
    }

    /// Draw the overlay centered in `area` and record control areas.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &ModalViewModel) {
        self.clamp_focus(data.controls);

        let panel = centered(area, PANEL_WIDTH, DetailView::HEIGHT + 5);
        f.render_widget(Clear, panel);

        let block = Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let [body, _, buttons] = Layout::vertical([
            Constraint::Length(DetailView::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(DetailView::new(data), body);

        self.control_areas.clear();
        let slots = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 3])
            .flex(ratatui::layout::Flex::SpaceBetween)
            .split(buttons);

        for (control, slot) in ModalControl::ORDER.into_iter().zip(slots.iter()) {
            let enabled = control.is_enabled(data.controls);
            let focused = enabled && control == self.focus;
            f.render_widget(ControlButton::new(control.label(), enabled, focused), *slot);
            if enabled {
                self.control_areas.push((control, *slot));
            }
        }
    }

    fn cycle(&mut self, controls: Controls, direction: isize) {
        let enabled = enabled(controls);
        let current = enabled
            .iter()
            .position(|control| *control == self.focus)
            .unwrap_or(0);
        let len = enabled.len() as isize;
        let next = (current as isize + direction).rem_euclid(len) as usize;
        self.focus = enabled[next];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_modal;
    use ratatui::{backend::TestBackend, Terminal};
    use rolodex_engine::Directory;
    use rolodex_testing::fixtures::sample_records;

    const BOTH: Controls = Controls {
        prev: true,
        next: true,
    };
    const FIRST: Controls = Controls {
        prev: false,
        next: true,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_tab_cycles_enabled_controls_only() {
        let mut modal = ModalComponent::new();

        modal.handle_input(key(KeyCode::Tab), FIRST);
        assert_eq!(modal.focus(), ModalControl::Next);
        modal.handle_input(key(KeyCode::Tab), FIRST);
        assert_eq!(modal.focus(), ModalControl::Close);
        modal.handle_input(key(KeyCode::BackTab), FIRST);
        assert_eq!(modal.focus(), ModalControl::Next);

        modal.handle_input(key(KeyCode::Left), BOTH);
        modal.handle_input(key(KeyCode::Left), BOTH);
        assert_eq!(modal.focus(), ModalControl::Prev);
    }

    #[test]
    fn test_activation_maps_to_modal_intents() {
        let mut modal = ModalComponent::new();
        assert_eq!(
            modal.handle_input(key(KeyCode::Esc), BOTH),
            Some(Intent::Modal(ModalAction::Close))
        );

        modal.handle_input(key(KeyCode::Right), BOTH);
        assert_eq!(
            modal.handle_input(key(KeyCode::Enter), BOTH),
            Some(Intent::Modal(ModalAction::Step(Step::Next)))
        );
    }

    #[test]
    fn test_focus_on_disabled_control_falls_back_to_close() {
        let mut modal = ModalComponent::new();
        modal.handle_input(key(KeyCode::BackTab), BOTH);
        assert_eq!(modal.focus(), ModalControl::Prev);

        assert_eq!(
            modal.handle_input(key(KeyCode::Char(' ')), FIRST),
            Some(Intent::Modal(ModalAction::Close))
        );
    }

    #[test]
    fn test_disabled_controls_are_not_click_targets() {
        let mut directory = Directory::with_records(sample_records());
        directory.open_at(0).unwrap();
        let data = present_modal(&directory).unwrap();

        let mut modal = ModalComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| modal.render(f, f.area(), &data))
            .unwrap();

        let targets: Vec<ModalControl> = modal.control_areas.iter().map(|(c, _)| *c).collect();
        assert_eq!(targets, vec![ModalControl::Close, ModalControl::Next]);

        let (_, next_area) = modal.control_areas[1];
        assert_eq!(
            modal.handle_click(next_area.x, next_area.y),
            Some(Intent::Modal(ModalAction::Step(Step::Next)))
        );
        assert_eq!(modal.focus(), ModalControl::Next);
        assert_eq!(modal.handle_click(0, 0), None);
    }
}
