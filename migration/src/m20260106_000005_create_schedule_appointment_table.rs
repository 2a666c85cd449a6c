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
                    .table(ScheduleAppointment::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduleAppointment::Id))
                    .col(integer(ScheduleAppointment::UserId))
                    .col(string(ScheduleAppointment::Title))
                    .col(text_null(ScheduleAppointment::Memo))
                    .col(timestamp(ScheduleAppointment::ScheduledAt))
                    .col(string_null(ScheduleAppointment::RecurrenceGroupId))
                    .col(
                        timestamp(ScheduleAppointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_appointment_user_id")
                            .from(ScheduleAppointment::Table, ScheduleAppointment::UserId)
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
            .drop_table(Table::drop().table(ScheduleAppointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleAppointment {
    Table,
    Id,
    UserId,
    Title,
    Memo,
    ScheduledAt,
    RecurrenceGroupId,
    CreatedAt,
}
