//! Modal navigation state machine.
//!
//! ```text
//!            open_at(i), i < len
//!  Closed ───────────────────────▶ Open(i)
//!    ▲                              │  ▲
//!    │ close / Esc / apply_query    │  │ Prev (c > 0) / Next (c < len-1)
//!    └──────────────────────────────┘  └──┘
//! ```
//!
//! The state is never stored separately from the [`Directory`] cursor; it is
//! read back from it so the two cannot drift apart.

use serde::Serialize;

use crate::{Directory, IndexError};

/// Direction of a modal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "cursor", rename_all = "lowercase")]
pub enum ModalState {
    Closed,
    Open(usize),
}

impl ModalState {
    pub fn of(directory: &Directory) -> Self {
        match directory.cursor() {
            Some(cursor) => ModalState::Open(cursor),
            None => ModalState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// Which step controls are enabled for a cursor position.
///
/// Pure function of the cursor and the view length; recomputed after every
/// transition rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

impl Controls {
    pub fn for_position(cursor: usize, len: usize) -> Self {
        Self {
            prev: cursor > 0,
            next: cursor + 1 < len,
        }
    }

    pub fn allows(&self, step: Step) -> bool {
        match step {
            Step::Prev => self.prev,
            Step::Next => self.next,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Open(usize),
    Step(Step),
    Close,
}

/// Apply `transition` to `directory` and report the resulting state.
///
/// Rejected transitions leave the directory untouched.
pub fn transition(
    directory: &mut Directory,
    transition: Transition,
) -> Result<ModalState, IndexError> {
    match transition {
        Transition::Open(index) => {
            directory.open_at(index)?;
        }
        Transition::Step(step) => {
            directory.step(step)?;
        }
        Transition::Close => directory.close(),
    }
    Ok(ModalState::of(directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_testing::fixtures::user;

    fn three() -> Directory {
        Directory::with_records(vec![
            user("Ann", "Arbor"),
            user("Ben", "Bolt"),
            user("Cy", "Cole"),
        ])
    }

    #[test]
    fn test_controls_for_position() {
        assert_eq!(
            Controls::for_position(0, 3),
            Controls {
                prev: false,
                next: true
            }
        );
        assert_eq!(
            Controls::for_position(1, 3),
            Controls {
                prev: true,
                next: true
            }
        );
        assert_eq!(
            Controls::for_position(2, 3),
            Controls {
                prev: true,
                next: false
            }
        );
        assert_eq!(
            Controls::for_position(0, 1),
            Controls {
                prev: false,
                next: false
            }
        );
    }

    #[test]
    fn test_open_step_close() {
        let mut dir = three();
        assert_eq!(ModalState::of(&dir), ModalState::Closed);

        assert_eq!(
            transition(&mut dir, Transition::Open(1)),
            Ok(ModalState::Open(1))
        );
        assert_eq!(
            transition(&mut dir, Transition::Step(Step::Next)),
            Ok(ModalState::Open(2))
        );
        assert_eq!(
            transition(&mut dir, Transition::Step(Step::Next)),
            Err(IndexError::AtEnd)
        );
        assert_eq!(ModalState::of(&dir), ModalState::Open(2));
        assert_eq!(
            transition(&mut dir, Transition::Close),
            Ok(ModalState::Closed)
        );
    }

    #[test]
    fn test_step_while_closed_is_rejected() {
        let mut dir = three();
        assert_eq!(
            transition(&mut dir, Transition::Step(Step::Prev)),
            Err(IndexError::NotOpen)
        );
        assert_eq!(ModalState::of(&dir), ModalState::Closed);
    }

    #[test]
    fn test_open_invalid_index_stays_closed() {
        let mut dir = three();
        assert_eq!(
            transition(&mut dir, Transition::Open(3)),
            Err(IndexError::OutOfBounds { index: 3, len: 3 })
        );
        assert!(!ModalState::of(&dir).is_open());
    }

    #[test]
    fn test_query_change_closes() {
        let mut dir = three();
        transition(&mut dir, Transition::Open(0)).unwrap();
        dir.apply_query("ben");
        assert_eq!(ModalState::of(&dir), ModalState::Closed);
    }
}
