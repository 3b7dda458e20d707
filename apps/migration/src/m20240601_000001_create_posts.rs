use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Posts::Id))
                    .col(string(Posts::InstagramUrl))
                    .col(string_null(Posts::ThumbnailUrl))
                    .col(text_null(Posts::Caption))
                    .col(string_null(Posts::CreatorName))
                    // Comma-delimited labels, '' when none.
                    .col(string(Posts::Tags).default(""))
                    .col(string_null(Posts::Keyword))
                    .col(string(Posts::Status).default("not requested"))
                    .col(string_null(Posts::ResourceLink))
                    .col(
                        timestamp_with_time_zone(Posts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    InstagramUrl,
    ThumbnailUrl,
    Caption,
    CreatorName,
    Tags,
    Keyword,
    Status,
    ResourceLink,
    CreatedAt,
}
