use super::domain::{AnsweredItem, SelectedItem};
use super::DataIntegrityError;
use crate::referential::{AnswerId, ReferentialTables};
use tracing::debug;

/// The interactive surface a question is put to.
pub trait Respondent {
    /// Returns the 0-based index of the chosen entry, or `None` when the prompt was cancelled.
    fn choose(&mut self, prompt: &str, choices: &[String]) -> Result<Option<usize>, PromptError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("terminal unavailable: {0}")]
    Terminal(String),
}

#[derive(Debug)]
pub(crate) enum Asked {
    Answered(AnsweredItem),
    Cancelled,
}

/// Put one selected variation to the respondent and resolve the answer id.
pub(crate) fn ask<P: Respondent + ?Sized>(
    tables: &ReferentialTables,
    item: SelectedItem,
    respondent: &mut P,
) -> Result<Asked, super::QuizError> {
    let SelectedItem {
        question_id,
        variation_id,
    } = item;

    let prompt = tables
        .prompt(question_id, variation_id)
        .ok_or(DataIntegrityError::MissingPrompt {
            question_id,
            variation_id,
        })?;

    let options: Vec<_> = tables.answers_for(question_id, variation_id).collect();
    if options.is_empty() {
        return Err(DataIntegrityError::MissingAnswers {
            question_id,
            variation_id,
        }
        .into());
    }

    let choices: Vec<String> = options
        .iter()
        .map(|option| option.answer_text.clone())
        .collect();

    let Some(index) = respondent.choose(prompt, &choices)? else {
        debug!(question_id, variation_id, "prompt cancelled by respondent");
        return Ok(Asked::Cancelled);
    };

    let option = options
        .get(index)
        .ok_or(DataIntegrityError::SelectionOutOfRange {
            question_id,
            variation_id,
            index,
            available: options.len(),
        })?;

    let position = index as AnswerId + 1;
    let answer_id = match option.answer_id {
        Some(stored) if stored != position => {
            return Err(DataIntegrityError::AnswerIdMismatch {
                question_id,
                variation_id,
                position,
                stored,
            }
            .into());
        }
        Some(stored) => stored,
        None => position,
    };

    debug!(question_id, variation_id, answer_id, "question answered");

    Ok(Asked::Answered(AnsweredItem {
        question_id,
        variation_id,
        answer_id,
    }))
}
