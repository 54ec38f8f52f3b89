use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Objekt::Table)
                    .if_not_exists()
                    .col(pk_auto(Objekt::Id))
                    .col(string_uniq(Objekt::Slug))
                    .col(string(Objekt::Season))
                    .col(string(Objekt::Member))
                    .col(string(Objekt::Series))
                    .col(string(Objekt::Class))
                    .col(integer(Objekt::Rarity))
                    .col(string_null(Objekt::ImageUrl))
                    .col(string_null(Objekt::BackgroundColor))
                    .to_owned(),
            )
            .await?;

        // Pool lookups always filter by rarity, usually with a season
        manager
            .create_index(
                Index::create()
                    .name("idx_objekt_rarity_season")
                    .table(Objekt::Table)
                    .col(Objekt::Rarity)
                    .col(Objekt::Season)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Objekt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Objekt {
    Table,
    Id,
    Slug,
    Season,
    Member,
    Series,
    Class,
    Rarity,
    ImageUrl,
    BackgroundColor,
}
