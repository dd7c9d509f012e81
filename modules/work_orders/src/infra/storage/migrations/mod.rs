//! Database migrations for the work orders module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250117_000001_create_work_orders::Migration),
            Box::new(m20250117_000002_create_work_order_comments::Migration),
            Box::new(m20250117_000003_create_work_order_attachments::Migration),
        ]
    }
}

mod m20250117_000001_create_work_orders {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrders::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(WorkOrders::Code).string().not_null())
                        .col(ColumnDef::new(WorkOrders::Title).string().not_null())
                        .col(ColumnDef::new(WorkOrders::Description).text())
                        // Cross-module references, no FK; validated through
                        // the assets and facilities clients
                        .col(ColumnDef::new(WorkOrders::AssetId).uuid())
                        .col(ColumnDef::new(WorkOrders::SpaceId).uuid())
                        .col(ColumnDef::new(WorkOrders::Status).string().not_null())
                        .col(ColumnDef::new(WorkOrders::Priority).string().not_null())
                        .col(ColumnDef::new(WorkOrders::RequestedBy).uuid())
                        .col(ColumnDef::new(WorkOrders::AssignedTo).uuid())
                        .col(ColumnDef::new(WorkOrders::DueAt).timestamp_with_time_zone())
                        .col(ColumnDef::new(WorkOrders::StartedAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(WorkOrders::CompletedAt)
                                .timestamp_with_time_zone(),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(WorkOrders::DeletedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            // Backs the next-code scan and refuses a duplicate if two
            // creates race past it
            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_code")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::Code)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_status")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_asset_id")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::AssetId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_assigned_to")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::AssignedTo)
                        .to_owned(),
                )
                .await?;

            // Overdue scans filter by due date
            manager
                .create_index(
                    Index::create()
                        .name("idx_work_orders_due_at")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::DueAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WorkOrders {
        Table,
        Id,
        Code,
        Title,
        Description,
        AssetId,
        SpaceId,
        Status,
        Priority,
        RequestedBy,
        AssignedTo,
        DueAt,
        StartedAt,
        CompletedAt,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }
}

mod m20250117_000002_create_work_order_comments {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkOrderComments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrderComments::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderComments::WorkOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderComments::AuthorId).uuid())
                        .col(ColumnDef::new(WorkOrderComments::Body).text().not_null())
                        .col(
                            ColumnDef::new(WorkOrderComments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(WorkOrderComments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_work_order_comments_work_order")
                                .from(WorkOrderComments::Table, WorkOrderComments::WorkOrderId)
                                .to(WorkOrders::Table, WorkOrders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_order_comments_work_order_id")
                        .table(WorkOrderComments::Table)
                        .col(WorkOrderComments::WorkOrderId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkOrderComments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WorkOrderComments {
        Table,
        Id,
        WorkOrderId,
        AuthorId,
        Body,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum WorkOrders {
        Table,
        Id,
    }
}

mod m20250117_000003_create_work_order_attachments {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkOrderAttachments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrderAttachments::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::WorkOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::FileName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::ContentType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::SizeBytes)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::ChecksumSha256)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::StoredPath)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkOrderAttachments::UploadedBy).uuid())
                        .col(
                            ColumnDef::new(WorkOrderAttachments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(WorkOrderAttachments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_work_order_attachments_work_order")
                                .from(
                                    WorkOrderAttachments::Table,
                                    WorkOrderAttachments::WorkOrderId,
                                )
                                .to(WorkOrders::Table, WorkOrders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_work_order_attachments_work_order_id")
                        .table(WorkOrderAttachments::Table)
                        .col(WorkOrderAttachments::WorkOrderId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(WorkOrderAttachments::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WorkOrderAttachments {
        Table,
        Id,
        WorkOrderId,
        FileName,
        ContentType,
        SizeBytes,
        ChecksumSha256,
        StoredPath,
        UploadedBy,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum WorkOrders {
        Table,
        Id,
    }
}
