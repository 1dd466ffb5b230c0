use rolodex_engine::Controls;
use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

/// Detail view of the open record.
///
/// Field values are already display-formatted (phone, address lines,
/// birthday) because this is the structure the modal renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalViewModel {
    /// Cursor position within the active view
    pub index: usize,
    /// Length of the active view
    pub total: usize,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    /// `"<number> <street>, <city>"`
    pub address: String,
    /// `"<state>, <country> <postcode>"`
    pub region: String,
    pub birthday: String,
    pub picture: String,
    pub controls: Controls,
}

impl CreateView for ModalViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::modal::ModalView;
        Box::new(ModalView::new(self, options))
    }
}

impl fmt::Display for ModalViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
