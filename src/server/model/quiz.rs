//! Internal quiz document with scoring weights.
//!
//! The `questions` JSON column stores the full document including per-option
//! trait weights; the public DTOs expose only values and labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    model::quiz::{QuizOptionDto, QuizQuestionDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
    /// Trait key -> weight added when this option is chosen.
    #[serde(default)]
    pub scores: HashMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

/// Parsed form of a quiz row's JSON columns.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDocument {
    pub questions: Vec<QuizQuestion>,
    /// Trait keys in declaration order; scoring ties resolve to the earliest.
    pub trait_order: Vec<String>,
}

impl QuizDocument {
    /// Parses the JSON columns of a quiz row.
    ///
    /// # Returns
    /// - `Ok(QuizDocument)` - Parsed questions and trait order
    /// - `Err(AppError::InternalError)` - Malformed stored document
    pub fn from_entity(quiz: &entity::quiz::Model) -> Result<Self, AppError> {
        let questions: Vec<QuizQuestion> = serde_json::from_value(quiz.questions.clone())
            .map_err(|e| {
                AppError::InternalError(format!("Malformed quiz document '{}': {}", quiz.slug, e))
            })?;

        let trait_order: Vec<String> =
            serde_json::from_value(quiz.trait_order.clone()).map_err(|e| {
                AppError::InternalError(format!("Malformed trait order '{}': {}", quiz.slug, e))
            })?;

        Ok(Self {
            questions,
            trait_order,
        })
    }

    /// Public view of the questions, weights stripped.
    pub fn into_question_dtos(self) -> Vec<QuizQuestionDto> {
        self.questions
            .into_iter()
            .map(|question| QuizQuestionDto {
                id: question.id,
                text: question.text,
                options: question
                    .options
                    .into_iter()
                    .map(|option| QuizOptionDto {
                        value: option.value,
                        label: option.label,
                    })
                    .collect(),
            })
            .collect()
    }
}
