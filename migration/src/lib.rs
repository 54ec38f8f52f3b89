pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_objekt_table;
mod m20260301_000002_create_collection_table;
mod m20260301_000003_create_pity_table;
mod m20260301_000004_create_economy_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_objekt_table::Migration),
            Box::new(m20260301_000002_create_collection_table::Migration),
            Box::new(m20260301_000003_create_pity_table::Migration),
            Box::new(m20260301_000004_create_economy_table::Migration),
        ]
    }
}
