use crate::referential::{AnswerId, QuestionId, VariationId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizMode {
    /// One randomly drawn variation per question.
    #[default]
    Sampled,
    /// Every variation of every question.
    Long,
}

impl QuizMode {
    pub const fn from_long_flag(long_quiz: bool) -> Self {
        if long_quiz {
            Self::Long
        } else {
            Self::Sampled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedItem {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsweredItem {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    pub answer_id: AnswerId,
}

/// Accumulated weight per house.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    totals: BTreeMap<String, f64>,
}

impl ScoreMap {
    /// Every house starts at zero.
    pub fn with_houses<I, S>(houses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            totals: houses.into_iter().map(|house| (house.into(), 0.0)).collect(),
        }
    }

    pub fn add(&mut self, house: &str, weight: f64) {
        match self.totals.get_mut(house) {
            Some(total) => *total += weight,
            None => {
                self.totals.insert(house.to_string(), weight);
            }
        }
    }

    pub fn get(&self, house: &str) -> Option<f64> {
        self.totals.get(house).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals
            .iter()
            .map(|(house, total)| (house.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Final result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub house: String,
    pub scores: ScoreMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Sorted(Verdict),
    /// The respondent cancelled a prompt; nothing was resolved.
    Aborted,
}
