//! Consumer user profile service.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::AppError, service::mirror::MirrorService},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    mirror: &'a MirrorService,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, mirror: &'a MirrorService) -> Self {
        Self { db, mirror }
    }

    /// Registers or refreshes a user by UID.
    pub async fn upsert(
        &self,
        uid: String,
        email: Option<String>,
        nickname: String,
    ) -> Result<UserDto, AppError> {
        if uid.trim().is_empty() || nickname.trim().is_empty() {
            return Err(AppError::BadRequest(
                "필수 항목이 누락되었습니다.".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .upsert(uid, email, nickname)
            .await?;

        self.mirror.mirror_user(&user).await;

        Ok(user_to_dto(user))
    }

    pub async fn get(&self, uid: &str) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(user_not_found)?;

        Ok(user_to_dto(user))
    }

    pub async fn update(
        &self,
        uid: &str,
        email: Option<String>,
        nickname: Option<String>,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo.find_by_uid(uid).await?.ok_or_else(user_not_found)?;
        let updated = repo.update(user, email, nickname).await?;

        self.mirror.mirror_user(&updated).await;

        Ok(user_to_dto(updated))
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("사용자를 찾을 수 없습니다.".to_string())
}

fn user_to_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        uid: user.uid,
        email: user.email,
        nickname: user.nickname,
        created_at: user.created_at,
    }
}
