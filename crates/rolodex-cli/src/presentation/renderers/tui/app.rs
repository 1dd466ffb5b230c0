use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rolodex_engine::{Directory, ModalState};
use rolodex_runtime::{apply_batch, BatchResult};

use super::TuiEvent;
use crate::binding::{self, Intent, Outcome};
use crate::presentation::views::tui::components::{
    GalleryAction, GalleryComponent, ModalComponent, SearchAction, SearchComponent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Gallery,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    Loading,
    Loaded(usize),
    Failed(String),
}

/// Browser state: the directory plus the components that draw it.
///
/// Input is routed by the modal state of the directory: while a record is
/// open the modal owns every key and click, otherwise the focused gallery or
/// search input does.
pub(crate) struct App {
    directory: Directory,
    pub focus: Focus,
    pub status: LoadStatus,
    pub gallery: GalleryComponent,
    pub modal: ModalComponent,
    pub search: SearchComponent,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            focus: Focus::Gallery,
            status: LoadStatus::Loading,
            gallery: GalleryComponent::new(),
            modal: ModalComponent::new(),
            search: SearchComponent::new(),
            should_quit: false,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => self.on_key(key),
            TuiEvent::Mouse(mouse) => self.on_mouse(mouse),
            TuiEvent::Resize => {}
            TuiEvent::BatchLoaded(result) => self.on_batch(result),
        }
    }

    fn on_batch(&mut self, result: BatchResult) {
        match apply_batch(&mut self.directory, result) {
            Ok(count) => {
                self.status = LoadStatus::Loaded(count);
                // Anything typed while loading still applies.
                if !self.search.text().is_empty() {
                    let query = self.search.text().to_string();
                    self.apply(Intent::ChangeQuery(query));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "continuing with an empty directory");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Raw mode swallows SIGINT
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(controls) = self.directory.controls() {
            if let Some(intent) = self.modal.handle_input(key, controls) {
                self.apply(intent);
            }
            return;
        }

        match self.focus {
            Focus::Search => {
                for action in self.search.handle_input(key) {
                    match action {
                        SearchAction::Intent(intent) => {
                            self.apply(intent);
                        }
                        SearchAction::Blur => self.focus = Focus::Gallery,
                    }
                }
            }
            Focus::Gallery => match self.gallery.handle_input(key, self.directory.view_len()) {
                Some(GalleryAction::Intent(intent)) => {
                    self.apply(intent);
                }
                Some(GalleryAction::FocusSearch) => self.focus = Focus::Search,
                Some(GalleryAction::Quit) => self.should_quit = true,
                None => {}
            },
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let modal_open = ModalState::of(&self.directory).is_open();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let intent = if modal_open {
                    self.modal.handle_click(mouse.column, mouse.row)
                } else if self.search.contains(mouse.column, mouse.row) {
                    self.focus = Focus::Search;
                    None
                } else {
                    self.focus = Focus::Gallery;
                    self.gallery.handle_click(mouse.column, mouse.row)
                };

                if let Some(intent) = intent {
                    self.apply(intent);
                }
            }
            MouseEventKind::ScrollDown if !modal_open => {
                self.gallery.scroll(1, self.directory.view_len());
            }
            MouseEventKind::ScrollUp if !modal_open => {
                self.gallery.scroll(-1, self.directory.view_len());
            }
            _ => {}
        }
    }

    /// Dispatch `intent` and bring the components in line with the outcome.
    fn apply(&mut self, intent: Intent) -> Outcome {
        let opening = matches!(intent, Intent::SelectCard(_));
        let outcome = binding::dispatch(&mut self.directory, intent);

        match outcome {
            Outcome::ViewChanged { .. } => self.gallery.reset(),
            Outcome::Modal(ModalState::Open(cursor)) => {
                if opening {
                    self.modal.reset();
                }
                self.gallery.highlight(cursor);
                if let Some(controls) = self.directory.controls() {
                    self.modal.clamp_focus(controls);
                }
            }
            Outcome::Modal(ModalState::Closed) | Outcome::Rejected(_) => {}
        }

        outcome
    }
}
