use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(pk_auto(Quiz::Id))
                    .col(string_uniq(Quiz::Slug))
                    .col(string(Quiz::Title))
                    .col(text_null(Quiz::Description))
                    .col(json(Quiz::TraitOrder))
                    .col(json(Quiz::Questions))
                    .col(
                        timestamp(Quiz::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quiz {
    Table,
    Id,
    Slug,
    Title,
    Description,
    TraitOrder,
    Questions,
    CreatedAt,
}
