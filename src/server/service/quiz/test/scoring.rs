use super::*;

use crate::server::model::quiz::{QuizDocument, QuizOption, QuizQuestion};

fn option(value: &str, scores: &[(&str, i32)]) -> QuizOption {
    QuizOption {
        value: value.to_string(),
        label: value.to_string(),
        scores: scores
            .iter()
            .map(|(trait_key, weight)| (trait_key.to_string(), *weight))
            .collect(),
    }
}

fn document() -> QuizDocument {
    QuizDocument {
        questions: vec![
            QuizQuestion {
                id: 1,
                text: "질문 1".to_string(),
                options: vec![
                    option("a", &[("sunlight", 2)]),
                    option("b", &[("moonlight", 2)]),
                ],
            },
            QuizQuestion {
                id: 2,
                text: "질문 2".to_string(),
                options: vec![
                    option("a", &[("sunlight", 1)]),
                    option("b", &[("moonlight", 3)]),
                ],
            },
        ],
        trait_order: vec!["sunlight".to_string(), "moonlight".to_string()],
    }
}

fn answer(question_id: u32, value: &str) -> QuizAnswerDto {
    QuizAnswerDto {
        question_id,
        value: value.to_string(),
    }
}

/// Tests that the highest-weighted trait wins.
///
/// Expected: "moonlight" with 5 points over "sunlight" with 0
#[test]
fn picks_highest_scoring_trait() {
    let result = score_answers(&document(), &[answer(1, "b"), answer(2, "b")]);

    assert_eq!(result, Some("moonlight".to_string()));
}

/// Tests the declared-order tie break.
///
/// Answers worth 2 points each way tie; "sunlight" is declared first.
///
/// Expected: "sunlight"
#[test]
fn breaks_ties_by_declared_order() {
    let result = score_answers(&document(), &[answer(1, "a"), answer(1, "b")]);

    assert_eq!(result, Some("sunlight".to_string()));
}

/// Tests that unknown questions and options are ignored.
///
/// Expected: the one valid answer decides the result
#[test]
fn ignores_unknown_questions_and_options() {
    let result = score_answers(
        &document(),
        &[answer(99, "a"), answer(1, "z"), answer(2, "a")],
    );

    assert_eq!(result, Some("sunlight".to_string()));
}

/// Tests a submission where nothing matches.
///
/// Expected: None, which the service maps to a 400
#[test]
fn returns_none_when_nothing_matches() {
    assert_eq!(score_answers(&document(), &[answer(99, "x")]), None);
    assert_eq!(score_answers(&document(), &[]), None);
}
