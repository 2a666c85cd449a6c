//! Personality quiz service.

pub mod scoring;

use sea_orm::DatabaseConnection;

use crate::{
    model::quiz::{QuizAnswerDto, QuizDto, QuizListItemDto, QuizResultDto},
    server::{
        data::{quiz::QuizRepository, user::UserRepository},
        error::AppError,
        model::quiz::QuizDocument,
    },
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<QuizListItemDto>, AppError> {
        let quizzes = QuizRepository::new(self.db).list().await?;

        Ok(quizzes
            .into_iter()
            .map(|quiz| QuizListItemDto {
                slug: quiz.slug,
                title: quiz.title,
                description: quiz.description,
            })
            .collect())
    }

    /// Gets a quiz with its questions, option weights stripped.
    pub async fn get(&self, slug: &str) -> Result<QuizDto, AppError> {
        let quiz = QuizRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(quiz_not_found)?;

        let document = QuizDocument::from_entity(&quiz)?;

        Ok(QuizDto {
            slug: quiz.slug,
            title: quiz.title,
            description: quiz.description,
            questions: document.into_question_dtos(),
        })
    }

    /// Scores a submission and stores the result.
    pub async fn submit(
        &self,
        uid: &str,
        slug: &str,
        answers: Vec<QuizAnswerDto>,
    ) -> Result<QuizResultDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))?;

        let repo = QuizRepository::new(self.db);
        let quiz = repo.find_by_slug(slug).await?.ok_or_else(quiz_not_found)?;

        let document = QuizDocument::from_entity(&quiz)?;

        let result_type = scoring::score_answers(&document, &answers)
            .ok_or_else(|| AppError::BadRequest("응답이 올바르지 않습니다.".to_string()))?;

        let answers_json = serde_json::to_value(&answers)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize answers: {}", e)))?;

        let result = repo
            .create_result(user.id, quiz.id, result_type, answers_json)
            .await?;

        Ok(QuizResultDto {
            quiz_slug: quiz.slug,
            quiz_title: quiz.title,
            result_type: result.result_type,
            created_at: result.created_at,
        })
    }

    /// Gets a user's past results, newest first.
    pub async fn results(&self, uid: &str) -> Result<Vec<QuizResultDto>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))?;

        let results = QuizRepository::new(self.db)
            .list_results_with_quiz(user.id)
            .await?;

        Ok(results
            .into_iter()
            .map(|(result, quiz)| {
                let (quiz_slug, quiz_title) = quiz
                    .map(|quiz| (quiz.slug, quiz.title))
                    .unwrap_or_default();

                QuizResultDto {
                    quiz_slug,
                    quiz_title,
                    result_type: result.result_type,
                    created_at: result.created_at,
                }
            })
            .collect())
    }
}

fn quiz_not_found() -> AppError {
    AppError::NotFound("퀴즈를 찾을 수 없습니다.".to_string())
}
