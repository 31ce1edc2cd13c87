use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create master_faq_detail table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MasterFaqDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MasterFaqDetail::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MasterFaqDetail::Question)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MasterFaqDetail::Answer).text().not_null())
                    .col(ColumnDef::new(MasterFaqDetail::FaqName).string_len(128))
                    .col(ColumnDef::new(MasterFaqDetail::FaqId).integer().not_null())
                    .col(
                        ColumnDef::new(MasterFaqDetail::Rowstatus)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(MasterFaqDetail::CreatedBy).string_len(100))
                    .col(
                        ColumnDef::new(MasterFaqDetail::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(MasterFaqDetail::ModifiedBy).string_len(100))
                    .col(
                        ColumnDef::new(MasterFaqDetail::ModifiedDate)
                            .timestamp_with_time_zone(),
                    )
                    // Rows are never physically deleted, so no ON DELETE action.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_master_faq_detail_faq_id")
                            .from(MasterFaqDetail::Table, MasterFaqDetail::FaqId)
                            .to(MasterFaq::Table, MasterFaq::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Cascades filter by owning topic
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_master_faq_detail_faq_id
                ON master_faq_detail (faq_id, rowstatus);
                "#,
            )
            .await?;

        // Listing filters and sorts by topic name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_master_faq_detail_faq_name
                ON master_faq_detail (faq_name);
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
                DROP INDEX IF EXISTS idx_master_faq_detail_faq_id;
                DROP INDEX IF EXISTS idx_master_faq_detail_faq_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MasterFaqDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MasterFaqDetail {
    Table,
    Id,
    Question,
    Answer,
    FaqName,
    FaqId,
    Rowstatus,
    CreatedBy,
    CreatedDate,
    ModifiedBy,
    ModifiedDate,
}

#[derive(DeriveIden)]
enum MasterFaq {
    Table,
    Id,
}
