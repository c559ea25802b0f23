use super::domain::{AnsweredItem, ScoreMap};
use crate::referential::ReferentialTables;
use tracing::debug;

/// Fold one answer into the running score.
///
/// Every weight row keyed by the answer's (question, variation, answer) adds its weight
/// to its house. An answer without weight rows leaves the score untouched.
pub fn accumulate(
    tables: &ReferentialTables,
    answer: &AnsweredItem,
    mut score: ScoreMap,
) -> ScoreMap {
    let mut matched = 0usize;

    for entry in tables.weights_for(answer.question_id, answer.variation_id, answer.answer_id) {
        score.add(&entry.house, entry.weight);
        matched += 1;
    }

    if matched == 0 {
        debug!(
            question_id = answer.question_id,
            variation_id = answer.variation_id,
            answer_id = answer.answer_id,
            "no weights for answer; contributes nothing"
        );
    }

    score
}
