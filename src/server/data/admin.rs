//! Admin account and permission repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::AdminAccount::find().count(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::admin_account::Model>, DbErr> {
        entity::prelude::AdminAccount::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_account::Model>, DbErr> {
        entity::prelude::AdminAccount::find()
            .filter(entity::admin_account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::admin_account::Model>, DbErr> {
        entity::prelude::AdminAccount::find()
            .order_by_asc(entity::admin_account::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        display_name: String,
    ) -> Result<entity::admin_account::Model, DbErr> {
        entity::admin_account::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            display_name: ActiveValue::Set(display_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes an account; permission rows cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AdminAccount::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn permissions_for(&self, admin_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::AdminPermission::find()
            .filter(entity::admin_permission::Column::AdminId.eq(admin_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.permission).collect())
    }

    /// Replaces an account's grants with the given set.
    pub async fn set_permissions(
        &self,
        admin_id: i32,
        permissions: &[String],
    ) -> Result<(), DbErr> {
        entity::prelude::AdminPermission::delete_many()
            .filter(entity::admin_permission::Column::AdminId.eq(admin_id))
            .exec(self.db)
            .await?;

        for permission in permissions {
            entity::admin_permission::ActiveModel {
                admin_id: ActiveValue::Set(admin_id),
                permission: ActiveValue::Set(permission.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
