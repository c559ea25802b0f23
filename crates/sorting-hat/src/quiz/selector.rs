use super::domain::{QuizMode, SelectedItem};
use crate::referential::{QuestionId, QuestionVariation, VariationId};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

/// Items to ask, in first-appearance order of each question.
pub fn select_variations<R: Rng + ?Sized>(
    questions: &[QuestionVariation],
    mode: QuizMode,
    rng: &mut R,
) -> Vec<SelectedItem> {
    match mode {
        QuizMode::Long => questions
            .iter()
            .map(|question| SelectedItem {
                question_id: question.question_id,
                variation_id: question.variation_id,
            })
            .collect(),
        QuizMode::Sampled => group_variations(questions)
            .into_iter()
            .filter_map(|(question_id, variations)| {
                variations.choose(&mut *rng).map(|&variation_id| SelectedItem {
                    question_id,
                    variation_id,
                })
            })
            .collect(),
    }
}

fn group_variations(questions: &[QuestionVariation]) -> Vec<(QuestionId, Vec<VariationId>)> {
    let mut groups: Vec<(QuestionId, Vec<VariationId>)> = Vec::new();
    let mut positions: HashMap<QuestionId, usize> = HashMap::new();

    for question in questions {
        let position = *positions.entry(question.question_id).or_insert_with(|| {
            groups.push((question.question_id, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(question.variation_id);
    }

    groups
}
