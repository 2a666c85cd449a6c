use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CounselingSession::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingSession::Id))
                    .col(integer(CounselingSession::UserId))
                    .col(string(CounselingSession::Persona))
                    .col(string_null(CounselingSession::Title))
                    .col(
                        timestamp(CounselingSession::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(CounselingSession::LastMessageAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_session_user_id")
                            .from(CounselingSession::Table, CounselingSession::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounselingSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CounselingSession {
    Table,
    Id,
    UserId,
    Persona,
    Title,
    StartedAt,
    LastMessageAt,
}
