//! A single question/answer pair and its reveal progress.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How much of a clue is currently on display.
///
/// Progresses strictly forward: `Hidden → ShowingQuestion → ShowingAnswer`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum RevealState {
    /// Nothing revealed yet.
    #[default]
    Hidden,
    /// The question is shown.
    ShowingQuestion,
    /// The answer is shown. Terminal.
    ShowingAnswer,
}

impl RevealState {
    /// Returns the state after one activation, or `None` if terminal.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::ShowingQuestion),
            Self::ShowingQuestion => Some(Self::ShowingAnswer),
            Self::ShowingAnswer => None,
        }
    }
}

/// One question/answer pair plus its reveal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Clue {
    /// Question text as delivered by the API.
    question: String,
    /// Answer text as delivered by the API.
    answer: String,
    /// Current reveal progress.
    #[getter(copy)]
    reveal_state: RevealState,
}

impl Clue {
    /// Creates a hidden clue.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    /// Advances the reveal state by one step.
    ///
    /// Returns the new state, or `None` when the answer is already showing.
    #[instrument(skip(self), fields(state = %self.reveal_state))]
    pub(crate) fn advance(&mut self) -> Option<RevealState> {
        let next = self.reveal_state.next()?;
        debug!(%next, "Advancing clue");
        self.reveal_state = next;
        Some(next)
    }
}
