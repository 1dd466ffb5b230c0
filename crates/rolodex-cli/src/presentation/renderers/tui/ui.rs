use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, Focus, LoadStatus};
use crate::presentation::presenters::{present_gallery, present_modal};
use crate::presentation::view_models::GalleryViewModel;

const LOADING: &str = "Loading profiles...";

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let gallery_vm = present_gallery(app.directory());
    let modal_vm = present_modal(app.directory());

    let [search_area, gallery_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let search_focused = app.focus == Focus::Search && modal_vm.is_none();
    app.search.render(f, search_area, search_focused);

    if app.status == LoadStatus::Loading {
        app.gallery.render_message(f, gallery_area, LOADING);
    } else {
        app.gallery.render(f, gallery_area, &gallery_vm);
    }

    render_status(f, status_area, app, &gallery_vm, modal_vm.is_some());

    if let Some(modal_vm) = modal_vm {
        app.modal.render(f, f.area(), &modal_vm);
    }
}

fn render_status(
    f: &mut Frame,
    area: Rect,
    app: &App,
    gallery: &GalleryViewModel,
    modal_open: bool,
) {
    let dim = Style::default().fg(Color::DarkGray);

    let summary = match (&app.status, gallery) {
        (LoadStatus::Loading, _) => Span::styled(LOADING, dim),
        (LoadStatus::Failed(message), _) => {
            Span::styled(message.clone(), Style::default().fg(Color::Red))
        }
        (LoadStatus::Loaded(_), GalleryViewModel::Cards { query: Some(_), total, cards }) => {
            Span::raw(format!("{} of {} profiles", cards.len(), total))
        }
        (LoadStatus::Loaded(count), GalleryViewModel::NoResults { .. }) => {
            Span::raw(format!("0 of {} profiles", count))
        }
        (LoadStatus::Loaded(count), _) => Span::raw(format!("{} profiles", count)),
    };

    let hints = if modal_open {
        "tab/←/→ focus  enter select  esc close"
    } else if app.focus == Focus::Search {
        "type to filter  enter done  esc back"
    } else {
        "←↓↑→/hjkl move  enter open  / search  q quit"
    };

    let line = Line::from(vec![summary, Span::raw("  "), Span::styled(hints, dim)]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tui::TuiEvent;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};
    use rolodex_testing::fixtures::sample_records;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .chunks(80)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let mut app = App::new();
        let text = screen(&mut app);
        assert!(text.contains(LOADING));
        assert!(text.contains("press / to search by name"));
    }

    #[test]
    fn test_gallery_then_modal_overlay() {
        let mut app = App::new();
        app.handle(TuiEvent::BatchLoaded(Ok(sample_records())));

        let text = screen(&mut app);
        assert!(text.contains("Ava Thompson"));
        assert!(text.contains("12 profiles"));

        app.handle(TuiEvent::Key(KeyEvent::from(KeyCode::Down)));
        app.handle(TuiEvent::Key(KeyEvent::from(KeyCode::Enter)));
        let text = screen(&mut app);
        assert!(text.contains("(253) 555-0142"));
        assert!(text.contains("Birthday 02/14/1987"));
        assert!(text.contains("[ Next > ]"));
    }

    #[test]
    fn test_no_results_placeholder() {
        let mut app = App::new();
        app.handle(TuiEvent::BatchLoaded(Ok(sample_records())));
        app.handle(TuiEvent::Key(KeyEvent::from(KeyCode::Char('/'))));
        for c in "zzzznomatch".chars() {
            app.handle(TuiEvent::Key(KeyEvent::from(KeyCode::Char(c))));
        }

        let text = screen(&mut app);
        assert!(text.contains("No results found."));
        assert!(text.contains("0 of 12 profiles"));
    }
}
