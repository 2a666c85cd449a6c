use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ContentItem::Id))
                    .col(string_uniq(ContentItem::Slug))
                    .col(string(ContentItem::Title))
                    .col(text(ContentItem::Body))
                    .col(string(ContentItem::Category))
                    .col(boolean(ContentItem::Published).default(false))
                    .col(
                        timestamp(ContentItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ContentItem::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContentItem {
    Table,
    Id,
    Slug,
    Title,
    Body,
    Category,
    Published,
    CreatedAt,
    UpdatedAt,
}
