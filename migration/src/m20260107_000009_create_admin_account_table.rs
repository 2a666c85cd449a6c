use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminAccount::Id))
                    .col(string_uniq(AdminAccount::Username))
                    .col(string(AdminAccount::PasswordHash))
                    .col(string(AdminAccount::DisplayName))
                    .col(
                        timestamp(AdminAccount::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminAccount {
    Table,
    Id,
    Username,
    PasswordHash,
    DisplayName,
    CreatedAt,
}
