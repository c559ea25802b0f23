//! Consistency checks over the referential tables.
//!
//! These are not run by the engine; the test suite runs them against the bundled tables.

use super::{AnswerId, QuestionId, ReferentialTables, VariationId};
use std::collections::BTreeMap;

pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationViolation {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    pub answer_id: AnswerId,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncoveredAnswer {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    pub answer_id: AnswerId,
}

/// Every answer whose weights, summed across houses, differ from one unit.
pub fn check_normalization(
    tables: &ReferentialTables,
    tolerance: f64,
) -> Vec<NormalizationViolation> {
    let mut totals: BTreeMap<(QuestionId, VariationId, AnswerId), f64> = BTreeMap::new();
    for weight in tables.weights() {
        *totals.entry(weight.key()).or_default() += weight.weight;
    }

    totals
        .into_iter()
        .filter(|(_, total)| (total - 1.0).abs() > tolerance)
        .map(
            |((question_id, variation_id, answer_id), total)| NormalizationViolation {
                question_id,
                variation_id,
                answer_id,
                total,
            },
        )
        .collect()
}

/// Every answer option that no weight row refers to.
pub fn check_weight_coverage(tables: &ReferentialTables) -> Vec<UncoveredAnswer> {
    let mut uncovered = Vec::new();

    for question in tables.questions() {
        let (question_id, variation_id) = (question.question_id, question.variation_id);
        for (position, answer) in tables.answers_for(question_id, variation_id).enumerate() {
            let answer_id = answer.answer_id.unwrap_or(position as AnswerId + 1);
            if tables
                .weights_for(question_id, variation_id, answer_id)
                .next()
                .is_none()
            {
                uncovered.push(UncoveredAnswer {
                    question_id,
                    variation_id,
                    answer_id,
                });
            }
        }
    }

    uncovered
}
