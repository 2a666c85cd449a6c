use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizListItemDto {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

// Option weights stay server-side; the client only sees values and labels.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizOptionDto {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizQuestionDto {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOptionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizDto {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuizQuestionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizAnswerDto {
    pub question_id: u32,
    pub value: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubmitQuizDto {
    pub answers: Vec<QuizAnswerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuizResultDto {
    pub quiz_slug: String,
    pub quiz_title: String,
    pub result_type: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
