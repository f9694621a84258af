pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guilds_table;
mod m20260301_000002_create_tags_table;
mod m20260308_000003_create_starboard_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guilds_table::Migration),
            Box::new(m20260301_000002_create_tags_table::Migration),
            Box::new(m20260308_000003_create_starboard_table::Migration),
        ]
    }
}
