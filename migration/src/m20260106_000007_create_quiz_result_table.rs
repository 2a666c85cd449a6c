use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260106_000006_create_quiz_table::Quiz,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizResult::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizResult::Id))
                    .col(integer(QuizResult::UserId))
                    .col(integer(QuizResult::QuizId))
                    .col(string(QuizResult::ResultType))
                    .col(json(QuizResult::Answers))
                    .col(
                        timestamp(QuizResult::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_result_user_id")
                            .from(QuizResult::Table, QuizResult::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_result_quiz_id")
                            .from(QuizResult::Table, QuizResult::QuizId)
                            .to(Quiz::Table, Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizResult {
    Table,
    Id,
    UserId,
    QuizId,
    ResultType,
    Answers,
    CreatedAt,
}
