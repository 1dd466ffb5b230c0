use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use rolodex_runtime::BatchResult;

#[derive(Debug)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    /// The startup fetch resolved
    BatchLoaded(BatchResult),
}

impl TuiEvent {
    /// Terminal events the browser reacts to. Key releases and repeats are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Event::Mouse(mouse) => Some(TuiEvent::Mouse(mouse)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    }
}
