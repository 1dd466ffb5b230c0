use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{DisplayOptions, ModalViewModel};

pub const PREV_LABEL: &str = "< Prev";
pub const CLOSE_LABEL: &str = "Close";
pub const NEXT_LABEL: &str = "Next >";

pub struct ModalView<'a> {
    data: &'a ModalViewModel,
    options: DisplayOptions,
}

impl<'a> ModalView<'a> {
    pub fn new(data: &'a ModalViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    /// Labels of the controls that can be activated, in display order.
    pub fn enabled_controls(data: &ModalViewModel) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(3);
        if data.controls.prev {
            labels.push(PREV_LABEL);
        }
        labels.push(CLOSE_LABEL);
        if data.controls.next {
            labels.push(NEXT_LABEL);
        }
        labels
    }
}

impl<'a> fmt::Display for ModalView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let vm = self.data;

        if self.options.enable_color {
            writeln!(f, "{}", vm.name.bold())?;
            writeln!(f, "{}", vm.email.cyan())?;
        } else {
            writeln!(f, "{}", vm.name)?;
            writeln!(f, "{}", vm.email)?;
        }
        writeln!(f, "{}", vm.city)?;
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, "{}", vm.phone)?;
        writeln!(f, "{}", vm.address)?;
        writeln!(f, "{}", vm.region)?;
        writeln!(f, "Birthday: {}", vm.birthday)?;
        writeln!(f)?;

        let position = format!("Record {} of {}", vm.index + 1, vm.total);
        let controls = Self::enabled_controls(vm).join(" | ");
        if self.options.enable_color {
            writeln!(f, "{}  {}", position.dimmed(), controls)
        } else {
            writeln!(f, "{}  {}", position, controls)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_modal;
    use rolodex_engine::Directory;
    use rolodex_testing::fixtures::sample_records;

    fn render_at(index: usize) -> String {
        let mut directory = Directory::with_records(sample_records());
        directory.open_at(index).unwrap();
        let vm = present_modal(&directory).unwrap();
        ModalView::new(&vm, DisplayOptions::plain()).to_string()
    }

    #[test]
    fn test_modal_text() {
        insta::assert_snapshot!(render_at(3), @r"
        Noah Walker
        noah.walker@example.com
        Toledo
        ----------------------------------------
        (419) 555-0190
        9164 Railroad St, Toledo
        Ohio, United States 43604
        Birthday: 04/09/1968

        Record 4 of 12  < Prev | Close | Next >
        ");
    }

    #[test]
    fn test_edges_hide_disabled_controls() {
        assert!(render_at(0).ends_with("Record 1 of 12  Close | Next >\n"));
        assert!(render_at(11).ends_with("Record 12 of 12  < Prev | Close\n"));
    }
}
