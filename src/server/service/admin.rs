//! Back-office account management and admin login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::admin::{AdminDto, AdminUserDto, PaginatedUsersDto},
    server::{
        data::{admin::AdminRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::auth::Permission,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials for back-office login.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or password
    ///   mismatch; the error does not reveal which
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::admin_account::Model, AppError> {
        let account = AdminRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| AppError::InternalError(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(account)
    }

    pub async fn create(
        &self,
        username: String,
        password: String,
        display_name: String,
        permissions: Vec<String>,
    ) -> Result<AdminDto, AppError> {
        validate_permissions(&permissions)?;

        let repo = AdminRepository::new(self.db);

        if repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("이미 사용 중인 아이디입니다.".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?
            .to_string();

        let account = repo.create(username, password_hash, display_name).await?;
        repo.set_permissions(account.id, &permissions).await?;

        Ok(account_to_dto(account, permissions))
    }

    pub async fn list(&self) -> Result<Vec<AdminDto>, AppError> {
        let repo = AdminRepository::new(self.db);
        let accounts = repo.list().await?;

        let mut dtos = Vec::with_capacity(accounts.len());
        for account in accounts {
            let permissions = repo.permissions_for(account.id).await?;
            dtos.push(account_to_dto(account, permissions));
        }

        Ok(dtos)
    }

    pub async fn get(&self, admin_id: i32) -> Result<AdminDto, AppError> {
        let repo = AdminRepository::new(self.db);

        let account = repo
            .find_by_id(admin_id)
            .await?
            .ok_or_else(account_not_found)?;
        let permissions = repo.permissions_for(account.id).await?;

        Ok(account_to_dto(account, permissions))
    }

    pub async fn delete(&self, admin_id: i32) -> Result<(), AppError> {
        let repo = AdminRepository::new(self.db);

        if repo.find_by_id(admin_id).await?.is_none() {
            return Err(account_not_found());
        }

        repo.delete(admin_id).await?;

        Ok(())
    }

    pub async fn set_permissions(
        &self,
        admin_id: i32,
        permissions: Vec<String>,
    ) -> Result<AdminDto, AppError> {
        validate_permissions(&permissions)?;

        let repo = AdminRepository::new(self.db);

        let account = repo
            .find_by_id(admin_id)
            .await?
            .ok_or_else(account_not_found)?;

        repo.set_permissions(account.id, &permissions).await?;

        Ok(account_to_dto(account, permissions))
    }

    /// Paginated consumer-user listing for the back office.
    pub async fn list_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsersDto, AppError> {
        let per_page = per_page.clamp(1, 100);
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsersDto {
            users: users
                .into_iter()
                .map(|user| AdminUserDto {
                    id: user.id,
                    uid: user.uid,
                    email: user.email,
                    nickname: user.nickname,
                    created_at: user.created_at,
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }
}

fn validate_permissions(permissions: &[String]) -> Result<(), AppError> {
    for permission in permissions {
        if Permission::from_str(permission).is_none() {
            return Err(AppError::BadRequest("알 수 없는 권한입니다.".to_string()));
        }
    }

    Ok(())
}

fn account_not_found() -> AppError {
    AppError::NotFound("관리자 계정을 찾을 수 없습니다.".to_string())
}

fn account_to_dto(account: entity::admin_account::Model, permissions: Vec<String>) -> AdminDto {
    AdminDto {
        id: account.id,
        username: account.username,
        display_name: account.display_name,
        permissions,
    }
}
