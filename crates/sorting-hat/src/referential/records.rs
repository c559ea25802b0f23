use serde::Deserialize;

pub type QuestionId = u32;
pub type VariationId = u32;
pub type AnswerId = u32;

/// One concrete phrasing of a question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionVariation {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    #[serde(rename = "variation_text")]
    pub prompt_text: String,
}

/// A selectable answer for one variation. Rows keep table order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerOption {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    #[serde(default)]
    pub answer_id: Option<AnswerId>,
    pub answer_text: String,
}

/// Choosing `answer_id` on this variation adds `weight` to `house`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeightEntry {
    pub question_id: QuestionId,
    pub variation_id: VariationId,
    pub answer_id: AnswerId,
    pub house: String,
    pub weight: f64,
}

impl WeightEntry {
    pub fn key(&self) -> (QuestionId, VariationId, AnswerId) {
        (self.question_id, self.variation_id, self.answer_id)
    }
}
