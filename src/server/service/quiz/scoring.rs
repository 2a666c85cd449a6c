//! Quiz answer scoring.

use std::collections::HashMap;

use crate::{model::quiz::QuizAnswerDto, server::model::quiz::QuizDocument};

/// Scores submitted answers against a quiz document.
///
/// Each matched option adds its per-trait weights; the result is the trait
/// with the highest total, ties resolved by the quiz's declared trait order.
/// Answers referencing unknown questions or options are ignored, matching how
/// the client renders only known options.
///
/// # Returns
/// - `Some(trait_key)` - At least one answer matched an option
/// - `None` - No answer matched anything
pub fn score_answers(document: &QuizDocument, answers: &[QuizAnswerDto]) -> Option<String> {
    let mut totals: HashMap<&str, i32> = HashMap::new();
    let mut matched = false;

    for answer in answers {
        let Some(question) = document
            .questions
            .iter()
            .find(|question| question.id == answer.question_id)
        else {
            continue;
        };

        let Some(option) = question
            .options
            .iter()
            .find(|option| option.value == answer.value)
        else {
            continue;
        };

        matched = true;
        for (trait_key, weight) in &option.scores {
            *totals.entry(trait_key.as_str()).or_insert(0) += weight;
        }
    }

    if !matched {
        return None;
    }

    // Walk the declared order so ties fall to the earliest trait.
    let mut best: Option<(&str, i32)> = None;
    for trait_key in &document.trait_order {
        let score = totals.get(trait_key.as_str()).copied().unwrap_or(0);
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((trait_key, score));
        }
    }

    best.map(|(trait_key, _)| trait_key.to_string())
}

#[cfg(test)]
#[path = "test/scoring.rs"]
mod test;
