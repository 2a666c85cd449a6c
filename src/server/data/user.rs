//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing consumer user records keyed by
//! their Firebase-issued UID. Handles registration upserts, profile updates,
//! and the paginated listing backing the admin back office.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user by UID.
    ///
    /// Inserts a new user or, when the UID already exists, updates the email
    /// and nickname. Registration and login both funnel through this call.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        uid: String,
        email: Option<String>,
        nickname: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            uid: ActiveValue::Set(uid),
            email: ActiveValue::Set(email),
            nickname: ActiveValue::Set(nickname),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Uid)
                .update_columns([entity::user::Column::Email, entity::user::Column::Nickname])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Uid.eq(uid))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Updates profile fields; `None` leaves a field unchanged.
    pub async fn update(
        &self,
        user: entity::user::Model,
        email: Option<String>,
        nickname: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active = user.into_active_model();

        if let Some(email) = email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(nickname) = nickname {
            active.nickname = ActiveValue::Set(nickname);
        }

        active.update(self.db).await
    }

    /// Gets a page of users ordered by signup time (newest first).
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of users and total user count
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }
}
