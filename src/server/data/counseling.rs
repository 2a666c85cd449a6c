//! Counseling session and chat message repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct CounselingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounselingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_session(
        &self,
        user_id: i32,
        persona: String,
        title: Option<String>,
    ) -> Result<entity::counseling_session::Model, DbErr> {
        entity::counseling_session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            persona: ActiveValue::Set(persona),
            title: ActiveValue::Set(title),
            started_at: ActiveValue::Set(Utc::now()),
            last_message_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a session scoped to its owner; another user's session id
    /// resolves to `None`.
    pub async fn find_session(
        &self,
        user_id: i32,
        session_id: i32,
    ) -> Result<Option<entity::counseling_session::Model>, DbErr> {
        entity::prelude::CounselingSession::find_by_id(session_id)
            .filter(entity::counseling_session::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists a user's sessions, most recent activity first.
    pub async fn list_sessions(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::counseling_session::Model>, DbErr> {
        entity::prelude::CounselingSession::find()
            .filter(entity::counseling_session::Column::UserId.eq(user_id))
            .order_by_desc(entity::counseling_session::Column::LastMessageAt)
            .order_by_desc(entity::counseling_session::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a session; messages cascade.
    pub async fn delete_session(&self, session_id: i32) -> Result<(), DbErr> {
        entity::prelude::CounselingSession::delete_by_id(session_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn append_message(
        &self,
        session_id: i32,
        role: String,
        content: String,
    ) -> Result<entity::chat_message::Model, DbErr> {
        entity::chat_message::ActiveModel {
            session_id: ActiveValue::Set(session_id),
            role: ActiveValue::Set(role),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all messages of a session in chronological order.
    pub async fn list_messages(
        &self,
        session_id: i32,
    ) -> Result<Vec<entity::chat_message::Model>, DbErr> {
        entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::SessionId.eq(session_id))
            .order_by_asc(entity::chat_message::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the latest `limit` messages in chronological order, used to build
    /// the completion context window.
    pub async fn recent_messages(
        &self,
        session_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::chat_message::Model>, DbErr> {
        let mut messages = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::SessionId.eq(session_id))
            .order_by_desc(entity::chat_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        messages.reverse();

        Ok(messages)
    }

    pub async fn touch_last_message(
        &self,
        session: entity::counseling_session::Model,
        at: DateTime<Utc>,
    ) -> Result<entity::counseling_session::Model, DbErr> {
        let mut active = session.into_active_model();
        active.last_message_at = ActiveValue::Set(Some(at));

        active.update(self.db).await
    }
}
