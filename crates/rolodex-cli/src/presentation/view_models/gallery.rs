use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    /// Position in the active view; the identifier passed to `SelectCard`
    pub index: usize,
    pub name: String,
    pub email: String,
    pub state: String,
    pub picture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryViewModel {
    /// Selectable cards for the active view
    Cards {
        query: Option<String>,
        total: usize,
        cards: Vec<CardViewModel>,
    },
    /// A search matched nothing; rendered as a placeholder that cannot be selected
    NoResults { query: String },
    /// Nothing loaded (fetch pending or failed)
    Empty,
}

impl GalleryViewModel {
    pub fn cards(&self) -> &[CardViewModel] {
        match self {
            GalleryViewModel::Cards { cards, .. } => cards,
            GalleryViewModel::NoResults { .. } | GalleryViewModel::Empty => &[],
        }
    }

    pub fn selectable_len(&self) -> usize {
        self.cards().len()
    }
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for GalleryViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::gallery::GalleryView;
        Box::new(GalleryView::new(self, options))
    }
}

impl fmt::Display for GalleryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
