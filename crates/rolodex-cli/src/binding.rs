//! UI binding layer.
//!
//! Raw input (keys, clicks, subcommand arguments) is translated into an
//! [`Intent`] by whoever owns the input, and every intent reaches the
//! directory through [`dispatch`]. Guards live in the engine's state machine
//! only, so pointer and keyboard activation cannot disagree about what is
//! allowed.

use rolodex_engine::{transition, Directory, IndexError, ModalState, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Step(Step),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A card of the active view was activated
    SelectCard(usize),
    /// The search text changed (live search)
    ChangeQuery(String),
    /// The search was submitted explicitly
    SubmitQuery(String),
    /// Prev/next/close inside the modal
    Modal(ModalAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active view was recomputed; the modal is closed
    ViewChanged { matches: usize },
    /// The modal transitioned to this state
    Modal(ModalState),
    /// The transition was refused and nothing changed
    Rejected(IndexError),
}

pub fn dispatch(directory: &mut Directory, intent: Intent) -> Outcome {
    match intent {
        Intent::ChangeQuery(query) | Intent::SubmitQuery(query) => {
            directory.apply_query(&query);
            let matches = directory.view_len();
            tracing::debug!(query = ?directory.active_query(), matches, "query applied");
            Outcome::ViewChanged { matches }
        }
        Intent::SelectCard(index) => drive(directory, Transition::Open(index)),
        Intent::Modal(ModalAction::Step(step)) => drive(directory, Transition::Step(step)),
        Intent::Modal(ModalAction::Close) => drive(directory, Transition::Close),
    }
}

fn drive(directory: &mut Directory, input: Transition) -> Outcome {
    match transition(directory, input) {
        Ok(state) => {
            tracing::debug!(?input, ?state, "modal transition");
            Outcome::Modal(state)
        }
        Err(err) => {
            tracing::debug!(?input, error = %err, "modal transition rejected");
            Outcome::Rejected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_testing::fixtures::sample_records;

    fn directory() -> Directory {
        Directory::with_records(sample_records())
    }

    #[test]
    fn test_change_and_submit_are_equivalent() {
        let mut typed = directory();
        let mut submitted = directory();

        let a = dispatch(&mut typed, Intent::ChangeQuery(" JOHN".to_string()));
        let b = dispatch(&mut submitted, Intent::SubmitQuery("john ".to_string()));

        assert_eq!(a, Outcome::ViewChanged { matches: 2 });
        assert_eq!(a, b);
        assert_eq!(typed.active_query(), submitted.active_query());
    }

    #[test]
    fn test_select_then_step_through_modal() {
        let mut dir = directory();

        assert_eq!(
            dispatch(&mut dir, Intent::SelectCard(10)),
            Outcome::Modal(ModalState::Open(10))
        );
        assert_eq!(
            dispatch(&mut dir, Intent::Modal(ModalAction::Step(Step::Next))),
            Outcome::Modal(ModalState::Open(11))
        );
        assert_eq!(
            dispatch(&mut dir, Intent::Modal(ModalAction::Step(Step::Next))),
            Outcome::Rejected(IndexError::AtEnd)
        );
        assert_eq!(
            dispatch(&mut dir, Intent::Modal(ModalAction::Close)),
            Outcome::Modal(ModalState::Closed)
        );
    }

    #[test]
    fn test_query_while_open_closes_modal() {
        let mut dir = directory();
        dispatch(&mut dir, Intent::SelectCard(3));

        let outcome = dispatch(&mut dir, Intent::ChangeQuery("zzzznomatch".to_string()));

        assert_eq!(outcome, Outcome::ViewChanged { matches: 0 });
        assert_eq!(dir.cursor(), None);
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut dir = directory();
        dispatch(&mut dir, Intent::ChangeQuery("john".to_string()));

        assert_eq!(
            dispatch(&mut dir, Intent::SelectCard(2)),
            Outcome::Rejected(IndexError::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(dir.cursor(), None);
    }
}
