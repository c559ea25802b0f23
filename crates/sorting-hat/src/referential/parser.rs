use super::records::{AnswerOption, QuestionVariation, WeightEntry};
use super::LoadError;
use serde::de::DeserializeOwned;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Questions,
    Answers,
    Weights,
}

impl Table {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Questions => "questions.csv",
            Self::Answers => "answers.csv",
            Self::Weights => "weights.csv",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<QuestionVariation>, LoadError> {
    parse_rows(reader, Table::Questions)
}

pub(crate) fn parse_answers<R: Read>(reader: R) -> Result<Vec<AnswerOption>, LoadError> {
    parse_rows(reader, Table::Answers)
}

pub(crate) fn parse_weights<R: Read>(reader: R) -> Result<Vec<WeightEntry>, LoadError> {
    let rows: Vec<WeightEntry> = parse_rows(reader, Table::Weights)?;

    if let Some(row) = rows.iter().find(|row| !row.weight.is_finite()) {
        return Err(LoadError::NonFiniteWeight {
            question_id: row.question_id,
            variation_id: row.variation_id,
            answer_id: row.answer_id,
            house: row.house.clone(),
        });
    }

    Ok(rows)
}

fn parse_rows<R, T>(reader: R, table: Table) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<T>() {
        rows.push(record.map_err(|source| LoadError::Csv { table, source })?);
    }

    Ok(rows)
}
