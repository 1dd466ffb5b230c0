use rolodex_engine::Directory;
use rolodex_types::UserRecord;

use crate::presentation::view_models::{CardViewModel, GalleryViewModel};

pub fn present_gallery(directory: &Directory) -> GalleryViewModel {
    let cards: Vec<CardViewModel> = directory
        .active_view()
        .enumerate()
        .map(|(index, record)| present_card(index, record))
        .collect();

    match (cards.is_empty(), directory.active_query()) {
        (true, Some(query)) => GalleryViewModel::NoResults {
            query: query.to_string(),
        },
        (true, None) => GalleryViewModel::Empty,
        (false, query) => GalleryViewModel::Cards {
            query: query.map(str::to_string),
            total: directory.full_set().len(),
            cards,
        },
    }
}

fn present_card(index: usize, record: &UserRecord) -> CardViewModel {
    CardViewModel {
        index,
        name: record.full_name(),
        email: record.email.clone(),
        state: record.location.state.clone(),
        picture: record.picture.large.clone(),
    }
}
