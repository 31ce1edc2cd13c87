pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_master_faq;
mod m20260301_000002_create_table_master_faq_detail;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_master_faq::Migration),
            Box::new(m20260301_000002_create_table_master_faq_detail::Migration),
        ]
    }
}
