use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000009_create_admin_account_table::AdminAccount;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminPermission::Id))
                    .col(integer(AdminPermission::AdminId))
                    .col(string(AdminPermission::Permission))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_permission_admin_id")
                            .from(AdminPermission::Table, AdminPermission::AdminId)
                            .to(AdminAccount::Table, AdminAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminPermission {
    Table,
    Id,
    AdminId,
    Permission,
}
