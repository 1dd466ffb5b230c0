use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{CardViewModel, DisplayOptions, GalleryViewModel};

pub const NO_RESULTS: &str = "No results found.";
pub const NOTHING_LOADED: &str = "No profiles loaded.";

pub struct GalleryView<'a> {
    data: &'a GalleryViewModel,
    options: DisplayOptions,
}

impl<'a> GalleryView<'a> {
    pub fn new(data: &'a GalleryViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_card(&self, f: &mut fmt::Formatter, card: &CardViewModel) -> fmt::Result {
        let index = format!("[{}]", card.index);
        if self.options.enable_color {
            writeln!(
                f,
                "{} {} <{}> ({})",
                index.dimmed(),
                card.name.bold(),
                card.email.cyan(),
                card.state
            )
        } else {
            writeln!(f, "{} {} <{}> ({})", index, card.name, card.email, card.state)
        }
    }
}

impl<'a> fmt::Display for GalleryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            GalleryViewModel::Cards {
                query,
                total,
                cards,
            } => {
                if let Some(query) = query {
                    writeln!(f, "{} of {} match \"{}\"", cards.len(), total, query)?;
                }
                for card in cards {
                    self.render_card(f, card)?;
                }
                Ok(())
            }
            GalleryViewModel::NoResults { .. } => {
                if self.options.enable_color {
                    writeln!(f, "{}", NO_RESULTS.yellow())
                } else {
                    writeln!(f, "{}", NO_RESULTS)
                }
            }
            GalleryViewModel::Empty => writeln!(f, "{}", NOTHING_LOADED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_gallery;
    use rolodex_engine::Directory;
    use rolodex_testing::fixtures::sample_records;

    fn render(query: &str) -> String {
        let mut directory = Directory::with_records(sample_records());
        directory.apply_query(query);
        let vm = present_gallery(&directory);
        GalleryView::new(&vm, DisplayOptions::plain()).to_string()
    }

    #[test]
    fn test_filtered_gallery_text() {
        insta::assert_snapshot!(render("john"), @r#"
        2 of 12 match "john"
        [0] Liam Johnson <liam.johnson@example.com> (Texas)
        [1] John Carter <john.carter@example.com> (Idaho)
        "#);
    }

    #[test]
    fn test_no_results_text() {
        assert_eq!(render("zzzznomatch"), "No results found.\n");
    }
}
