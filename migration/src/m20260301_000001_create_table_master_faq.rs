use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create master_faq table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MasterFaq::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MasterFaq::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MasterFaq::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(MasterFaq::Rowstatus)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(MasterFaq::CreatedBy).string_len(100))
                    .col(
                        ColumnDef::new(MasterFaq::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(MasterFaq::ModifiedBy).string_len(100))
                    .col(ColumnDef::new(MasterFaq::ModifiedDate).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Names are unique among active topics only; a deleted row keeps its
        // name so it can be revived later.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_master_faq_active_name_unique
                ON master_faq (name)
                WHERE rowstatus = 1;
                "#,
            )
            .await?;

        // Revival lookup by (name, rowstatus)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_master_faq_name_rowstatus
                ON master_faq (name, rowstatus);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_master_faq_active_name_unique;
                DROP INDEX IF EXISTS idx_master_faq_name_rowstatus;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MasterFaq::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MasterFaq {
    Table,
    Id,
    Name,
    Rowstatus,
    CreatedBy,
    CreatedDate,
    ModifiedBy,
    ModifiedDate,
}
