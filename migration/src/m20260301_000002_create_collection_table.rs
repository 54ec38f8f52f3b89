use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_objekt_table::Objekt;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_auto(Collection::Id))
                    .col(string(Collection::UserId))
                    .col(integer(Collection::ObjektId))
                    .col(integer(Collection::Copies).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_objekt_id")
                            .from(Collection::Table, Collection::ObjektId)
                            .to(Objekt::Table, Objekt::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_user_objekt")
                    .table(Collection::Table)
                    .col(Collection::UserId)
                    .col(Collection::ObjektId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    Id,
    UserId,
    ObjektId,
    Copies,
}
