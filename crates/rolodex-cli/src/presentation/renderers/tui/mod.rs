//! Interactive browser.
//!
//! The startup fetch runs on a [`Loader`] thread; this loop keeps drawing
//! and handling input until its result arrives, then feeds it to the [`App`]
//! as one more event. Everything else is single-threaded.

mod app;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use rolodex_providers::DataSource;
use rolodex_runtime::{BatchResult, Loader};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use app::App;
pub use tui_event::TuiEvent;

pub struct TuiBrowser;

impl TuiBrowser {
    pub fn run(source: Box<dyn DataSource>) -> Result<()> {
        let batches = Loader::spawn(source);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app = App::new();
        let result = event_loop(&mut terminal, &mut app, &batches);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    batches: &Receiver<BatchResult>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)?
            && let Some(tui_event) = TuiEvent::from_terminal(event::read()?)
        {
            app.handle(tui_event);
        }

        while let Ok(batch) = batches.try_recv() {
            app.handle(TuiEvent::BatchLoaded(batch));
        }
    }

    Ok(())
}
