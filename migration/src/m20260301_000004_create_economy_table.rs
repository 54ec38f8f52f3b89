use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Economy::Table)
                    .if_not_exists()
                    .col(string(Economy::UserId).primary_key())
                    .col(big_integer(Economy::Balance).default(100))
                    .col(
                        timestamp_with_time_zone(Economy::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Economy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Economy {
    Table,
    UserId,
    Balance,
    CreatedAt,
}
