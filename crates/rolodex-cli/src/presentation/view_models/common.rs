use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

impl DisplayOptions {
    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }
}

/// Bridge from a ViewModel to its text View.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
