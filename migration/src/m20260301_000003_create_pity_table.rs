use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pity::Table)
                    .if_not_exists()
                    .col(string(Pity::UserId).primary_key())
                    .col(integer(Pity::PityCount).default(0))
                    .col(string_null(Pity::ChaseObjektSlug))
                    .col(integer(Pity::ChasePityCount).default(0))
                    .col(
                        timestamp_with_time_zone(Pity::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pity {
    Table,
    UserId,
    PityCount,
    ChaseObjektSlug,
    ChasePityCount,
    UpdatedAt,
}
