//! Quiz factory.
//!
//! Creates a two-question quiz over the traits "sunlight" and "moonlight"
//! with per-option weights, matching the stored document shape the scoring
//! code parses.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

pub async fn create_quiz(db: &DatabaseConnection) -> Result<entity::quiz::Model, DbErr> {
    let id = next_id();

    create_quiz_with_slug(db, format!("quiz-{}", id)).await
}

pub async fn create_quiz_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::quiz::Model, DbErr> {
    let questions = json!([
        {
            "id": 1,
            "text": "쉬는 날 아침, 당신은?",
            "options": [
                { "value": "a", "label": "일찍 일어나 산책", "scores": { "sunlight": 2 } },
                { "value": "b", "label": "늦잠 후 느긋하게", "scores": { "moonlight": 2 } }
            ]
        },
        {
            "id": 2,
            "text": "스트레스를 받으면?",
            "options": [
                { "value": "a", "label": "사람들을 만난다", "scores": { "sunlight": 1, "moonlight": 0 } },
                { "value": "b", "label": "혼자 정리한다", "scores": { "moonlight": 1 } }
            ]
        }
    ]);

    entity::quiz::ActiveModel {
        slug: ActiveValue::Set(slug.into()),
        title: ActiveValue::Set("마음 성향 테스트".to_string()),
        description: ActiveValue::Set(Some("당신의 에너지 방향을 알아보세요.".to_string())),
        trait_order: ActiveValue::Set(json!(["sunlight", "moonlight"])),
        questions: ActiveValue::Set(questions),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
