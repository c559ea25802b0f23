//! Read-only question, answer, and weight tables.
//!
//! Tables are loaded once per run, either from the copies compiled into the crate or
//! from a directory holding `questions.csv`, `answers.csv`, and `weights.csv`. Rows are
//! kept in table order and indexed by their composite keys.

pub mod integrity;
mod parser;
mod records;

pub use parser::Table;
pub use records::{AnswerId, AnswerOption, QuestionId, QuestionVariation, VariationId, WeightEntry};

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.csv");
const BUNDLED_ANSWERS: &str = include_str!("../../data/answers.csv");
const BUNDLED_WEIGHTS: &str = include_str!("../../data/weights.csv");

/// Where the referential tables come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Bundled,
    Directory(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {table} data: {source}")]
    Csv { table: Table, source: csv::Error },
    #[error(
        "weight for question {question_id} variation {variation_id} answer {answer_id} \
         (house {house}) is not a finite number"
    )]
    NonFiniteWeight {
        question_id: QuestionId,
        variation_id: VariationId,
        answer_id: AnswerId,
        house: String,
    },
}

/// The three tables plus lookups by composite key.
#[derive(Debug, Clone, Default)]
pub struct ReferentialTables {
    questions: Vec<QuestionVariation>,
    answers: Vec<AnswerOption>,
    weights: Vec<WeightEntry>,
    prompt_index: HashMap<(QuestionId, VariationId), usize>,
    answer_index: HashMap<(QuestionId, VariationId), Vec<usize>>,
    weight_index: HashMap<(QuestionId, VariationId, AnswerId), Vec<usize>>,
}

impl ReferentialTables {
    pub fn new(
        questions: Vec<QuestionVariation>,
        answers: Vec<AnswerOption>,
        weights: Vec<WeightEntry>,
    ) -> Self {
        let mut prompt_index = HashMap::new();
        for (position, question) in questions.iter().enumerate() {
            prompt_index
                .entry((question.question_id, question.variation_id))
                .or_insert(position);
        }

        let mut answer_index: HashMap<_, Vec<usize>> = HashMap::new();
        for (position, answer) in answers.iter().enumerate() {
            answer_index
                .entry((answer.question_id, answer.variation_id))
                .or_default()
                .push(position);
        }

        let mut weight_index: HashMap<_, Vec<usize>> = HashMap::new();
        for (position, weight) in weights.iter().enumerate() {
            weight_index.entry(weight.key()).or_default().push(position);
        }

        Self {
            questions,
            answers,
            weights,
            prompt_index,
            answer_index,
            weight_index,
        }
    }

    pub fn load(source: &TableSource) -> Result<Self, LoadError> {
        let tables = match source {
            TableSource::Bundled => Self::from_readers(
                BUNDLED_QUESTIONS.as_bytes(),
                BUNDLED_ANSWERS.as_bytes(),
                BUNDLED_WEIGHTS.as_bytes(),
            )?,
            TableSource::Directory(dir) => Self::from_dir(dir)?,
        };

        debug!(
            questions = tables.questions.len(),
            answers = tables.answers.len(),
            weights = tables.weights.len(),
            ?source,
            "referential tables loaded"
        );

        Ok(tables)
    }

    pub fn bundled() -> Result<Self, LoadError> {
        Self::load(&TableSource::Bundled)
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let open = |table: Table| {
            let path = dir.join(table.file_name());
            std::fs::File::open(&path).map_err(|source| LoadError::Io { path, source })
        };

        Self::from_readers(
            open(Table::Questions)?,
            open(Table::Answers)?,
            open(Table::Weights)?,
        )
    }

    pub fn from_readers<Q: Read, A: Read, W: Read>(
        questions: Q,
        answers: A,
        weights: W,
    ) -> Result<Self, LoadError> {
        Ok(Self::new(
            parser::parse_questions(questions)?,
            parser::parse_answers(answers)?,
            parser::parse_weights(weights)?,
        ))
    }

    pub fn questions(&self) -> &[QuestionVariation] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerOption] {
        &self.answers
    }

    pub fn weights(&self) -> &[WeightEntry] {
        &self.weights
    }

    pub fn prompt(&self, question_id: QuestionId, variation_id: VariationId) -> Option<&str> {
        self.prompt_index
            .get(&(question_id, variation_id))
            .map(|&position| self.questions[position].prompt_text.as_str())
    }

    /// Answer options for one variation, in table order.
    pub fn answers_for(
        &self,
        question_id: QuestionId,
        variation_id: VariationId,
    ) -> impl Iterator<Item = &AnswerOption> + '_ {
        self.answer_index
            .get(&(question_id, variation_id))
            .into_iter()
            .flatten()
            .map(|&position| &self.answers[position])
    }

    pub fn weights_for(
        &self,
        question_id: QuestionId,
        variation_id: VariationId,
        answer_id: AnswerId,
    ) -> impl Iterator<Item = &WeightEntry> + '_ {
        self.weight_index
            .get(&(question_id, variation_id, answer_id))
            .into_iter()
            .flatten()
            .map(|&position| &self.weights[position])
    }

    /// Distinct houses named by the weights table, sorted.
    pub fn houses(&self) -> Vec<String> {
        self.weights
            .iter()
            .map(|weight| weight.house.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
