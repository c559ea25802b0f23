//! The sorting ceremony: choose the variations to ask, put each one to the respondent,
//! fold the answers into per-house totals, and name the winner.

mod domain;
mod outcome;
mod scoring;
mod selector;
mod session;

pub use domain::{AnsweredItem, QuizMode, RunOutcome, ScoreMap, SelectedItem, Verdict};
pub use outcome::resolve_winner;
pub use scoring::accumulate;
pub use selector::select_variations;
pub use session::{PromptError, Respondent};

use crate::referential::{AnswerId, QuestionId, ReferentialTables, VariationId};
use rand::seq::SliceRandom;
use rand::Rng;
use session::Asked;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
    #[error("no houses are configured, the outcome cannot be resolved")]
    EmptyConfiguration,
    #[error("interactive prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

/// A row the engine needs is missing or inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("no prompt text for question {question_id} variation {variation_id}")]
    MissingPrompt {
        question_id: QuestionId,
        variation_id: VariationId,
    },
    #[error("no answer options for question {question_id} variation {variation_id}")]
    MissingAnswers {
        question_id: QuestionId,
        variation_id: VariationId,
    },
    #[error(
        "answer in position {position} of question {question_id} variation {variation_id} \
         is stored with id {stored}"
    )]
    AnswerIdMismatch {
        question_id: QuestionId,
        variation_id: VariationId,
        position: AnswerId,
        stored: AnswerId,
    },
    #[error(
        "selection {index} is outside the {available} options of question {question_id} \
         variation {variation_id}"
    )]
    SelectionOutOfRange {
        question_id: QuestionId,
        variation_id: VariationId,
        index: usize,
        available: usize,
    },
}

/// Runs one quiz over a set of loaded tables.
pub struct SortingHat<'t, R> {
    tables: &'t ReferentialTables,
    rng: R,
}

impl<'t> SortingHat<'t, rand::rngs::ThreadRng> {
    pub fn new(tables: &'t ReferentialTables) -> Self {
        Self::with_rng(tables, rand::rng())
    }
}

impl<'t, R: Rng> SortingHat<'t, R> {
    pub fn with_rng(tables: &'t ReferentialTables, rng: R) -> Self {
        Self { tables, rng }
    }

    pub fn select(&mut self, mode: QuizMode) -> Vec<SelectedItem> {
        let items = select_variations(self.tables.questions(), mode, &mut self.rng);
        debug!(?mode, items = items.len(), "variations selected");
        items
    }

    /// Ask every item in a freshly shuffled order, then resolve the winner.
    ///
    /// Stops at the first cancelled prompt without scoring or resolving anything further.
    pub fn run<P: Respondent + ?Sized>(
        &mut self,
        mut items: Vec<SelectedItem>,
        respondent: &mut P,
    ) -> Result<RunOutcome, QuizError> {
        items.shuffle(&mut self.rng);

        let mut score = ScoreMap::with_houses(self.tables.houses());

        for item in items {
            match session::ask(self.tables, item, respondent)? {
                Asked::Answered(answer) => score = accumulate(self.tables, &answer, score),
                Asked::Cancelled => return Ok(RunOutcome::Aborted),
            }
        }

        debug!(?score, "all questions answered");
        let house = resolve_winner(&score, &mut self.rng)?;
        info!(%house, "house chosen");

        Ok(RunOutcome::Sorted(Verdict {
            house,
            scores: score,
        }))
    }

    /// Selection followed by [`SortingHat::run`].
    pub fn sort<P: Respondent + ?Sized>(
        &mut self,
        mode: QuizMode,
        respondent: &mut P,
    ) -> Result<RunOutcome, QuizError> {
        let items = self.select(mode);
        self.run(items, respondent)
    }
}
