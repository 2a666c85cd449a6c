//! Counseling session and AI-persona chat service.

pub mod llm;
pub mod persona;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::counseling::{ChatMessageDto, ChatReplyDto, SessionDetailDto, SessionDto},
    server::{
        data::{counseling::CounselingRepository, user::UserRepository},
        error::AppError,
        model::chat::{ChatRole, ChatTurn},
        service::{
            counseling::{
                llm::LlmClient,
                persona::{Persona, FALLBACK_REPLY},
            },
            mirror::MirrorService,
        },
    },
};

/// Number of stored messages included in the completion context window.
const HISTORY_WINDOW: u64 = 20;

pub struct CounselingService<'a> {
    db: &'a DatabaseConnection,
    llm: &'a LlmClient,
    mirror: &'a MirrorService,
}

impl<'a> CounselingService<'a> {
    pub fn new(db: &'a DatabaseConnection, llm: &'a LlmClient, mirror: &'a MirrorService) -> Self {
        Self { db, llm, mirror }
    }

    /// Opens a counseling session styled by a persona.
    pub async fn create_session(
        &self,
        uid: &str,
        persona_key: &str,
        title: Option<String>,
    ) -> Result<SessionDto, AppError> {
        let user = self.find_user(uid).await?;

        let persona = Persona::from_key(persona_key)
            .ok_or_else(|| AppError::BadRequest("알 수 없는 상담 페르소나입니다.".to_string()))?;

        let repo = CounselingRepository::new(self.db);
        let session = repo
            .create_session(user.id, persona.key().to_string(), title)
            .await?;

        self.mirror.mirror_session(uid, &session).await;

        Ok(session_to_dto(session))
    }

    pub async fn list_sessions(&self, uid: &str) -> Result<Vec<SessionDto>, AppError> {
        let user = self.find_user(uid).await?;

        let sessions = CounselingRepository::new(self.db)
            .list_sessions(user.id)
            .await?;

        Ok(sessions.into_iter().map(session_to_dto).collect())
    }

    pub async fn get_session(
        &self,
        uid: &str,
        session_id: i32,
    ) -> Result<SessionDetailDto, AppError> {
        let user = self.find_user(uid).await?;
        let repo = CounselingRepository::new(self.db);

        let session = repo
            .find_session(user.id, session_id)
            .await?
            .ok_or_else(session_not_found)?;

        let messages = repo.list_messages(session.id).await?;

        Ok(SessionDetailDto {
            id: session.id,
            persona: session.persona,
            title: session.title,
            started_at: session.started_at,
            last_message_at: session.last_message_at,
            messages: messages.into_iter().map(message_to_dto).collect(),
        })
    }

    pub async fn delete_session(&self, uid: &str, session_id: i32) -> Result<(), AppError> {
        let user = self.find_user(uid).await?;
        let repo = CounselingRepository::new(self.db);

        let session = repo
            .find_session(user.id, session_id)
            .await?
            .ok_or_else(session_not_found)?;

        repo.delete_session(session.id).await?;
        self.mirror.mirror_session_deleted(uid, session_id).await;

        Ok(())
    }

    /// Appends a user message and produces the assistant reply.
    ///
    /// The reply comes from one chat completion call carrying the persona's
    /// system prompt plus the last `HISTORY_WINDOW` stored messages. When the
    /// provider fails for any reason the turn still completes with the static
    /// fallback reply; the client never sees a 5xx for a provider outage.
    pub async fn send_message(
        &self,
        uid: &str,
        session_id: i32,
        content: String,
    ) -> Result<ChatReplyDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "메시지 내용을 입력해주세요.".to_string(),
            ));
        }

        let user = self.find_user(uid).await?;
        let repo = CounselingRepository::new(self.db);

        let session = repo
            .find_session(user.id, session_id)
            .await?
            .ok_or_else(session_not_found)?;

        let persona = Persona::from_key(&session.persona).ok_or_else(|| {
            AppError::InternalError(format!(
                "Session {} has unknown persona '{}'",
                session.id, session.persona
            ))
        })?;

        let user_message = repo
            .append_message(session.id, ChatRole::User.as_str().to_string(), content)
            .await?;

        let history = repo.recent_messages(session.id, HISTORY_WINDOW).await?;

        let mut turns = Vec::with_capacity(history.len() + 1);
        turns.push(ChatTurn::new(ChatRole::System, persona.system_prompt()));
        for message in &history {
            let role = match message.role.as_str() {
                "assistant" => ChatRole::Assistant,
                _ => ChatRole::User,
            };
            turns.push(ChatTurn::new(role, message.content.clone()));
        }

        let reply = match self.llm.chat(&turns).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Chat completion failed for session {}: {}", session.id, e);
                FALLBACK_REPLY.to_string()
            }
        };

        let assistant_message = repo
            .append_message(session.id, ChatRole::Assistant.as_str().to_string(), reply)
            .await?;

        repo.touch_last_message(session, Utc::now()).await?;

        Ok(ChatReplyDto {
            user_message: message_to_dto(user_message),
            assistant_message: message_to_dto(assistant_message),
        })
    }

    async fn find_user(&self, uid: &str) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다.".to_string()))
    }
}

fn session_not_found() -> AppError {
    AppError::NotFound("상담 세션을 찾을 수 없습니다.".to_string())
}

fn session_to_dto(session: entity::counseling_session::Model) -> SessionDto {
    SessionDto {
        id: session.id,
        persona: session.persona,
        title: session.title,
        started_at: session.started_at,
        last_message_at: session.last_message_at,
    }
}

fn message_to_dto(message: entity::chat_message::Model) -> ChatMessageDto {
    ChatMessageDto {
        id: message.id,
        role: message.role,
        content: message.content,
        created_at: message.created_at,
    }
}
