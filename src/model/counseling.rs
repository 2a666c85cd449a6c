use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSessionDto {
    /// Persona key styling the assistant ("strategic", "empathetic", "realistic").
    pub persona: String,
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SessionDto {
    pub id: i32,
    pub persona: String,
    pub title: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub started_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_message_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SessionDetailDto {
    pub id: i32,
    pub persona: String,
    pub title: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub started_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_message_at: Option<DateTime<Utc>>,
    pub messages: Vec<ChatMessageDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SendMessageDto {
    pub content: String,
}

/// Both sides of one chat turn: the stored user message and the assistant
/// reply (live completion or the fallback text when the provider fails).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChatReplyDto {
    pub user_message: ChatMessageDto,
    pub assistant_message: ChatMessageDto,
}
