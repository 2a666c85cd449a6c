use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

// The one-record-per-user-per-day rule is enforced by the repository at
// write time; the schema intentionally carries no unique index for it.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmotionRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(EmotionRecord::Id))
                    .col(integer(EmotionRecord::UserId))
                    .col(date(EmotionRecord::RecordDate))
                    .col(string(EmotionRecord::Mood))
                    .col(integer(EmotionRecord::Intensity))
                    .col(text_null(EmotionRecord::Note))
                    .col(
                        timestamp(EmotionRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmotionRecord::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emotion_record_user_id")
                            .from(EmotionRecord::Table, EmotionRecord::UserId)
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
            .drop_table(Table::drop().table(EmotionRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmotionRecord {
    Table,
    Id,
    UserId,
    RecordDate,
    Mood,
    Intensity,
    Note,
    CreatedAt,
    UpdatedAt,
}
