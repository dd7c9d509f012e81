//! Database migrations for the maintenance module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250117_000001_create_maintenance_schedules::Migration),
            Box::new(m20250117_000002_create_maintenance_logs::Migration),
        ]
    }
}

mod m20250117_000001_create_maintenance_schedules {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaintenanceSchedules::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaintenanceSchedules::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        // Cross-module reference, no FK; validated through
                        // the assets client
                        .col(
                            ColumnDef::new(MaintenanceSchedules::AssetId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::Title)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::Frequency)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::NextDueAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::LastPerformedAt)
                                .timestamp_with_time_zone(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(MaintenanceSchedules::Notes).text())
                        .col(
                            ColumnDef::new(MaintenanceSchedules::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(MaintenanceSchedules::DeletedAt)
                                .timestamp_with_time_zone(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_maintenance_schedules_asset_id")
                        .table(MaintenanceSchedules::Table)
                        .col(MaintenanceSchedules::AssetId)
                        .to_owned(),
                )
                .await?;

            // Due-work queries scan by due date
            manager
                .create_index(
                    Index::create()
                        .name("idx_maintenance_schedules_next_due_at")
                        .table(MaintenanceSchedules::Table)
                        .col(MaintenanceSchedules::NextDueAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaintenanceSchedules::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MaintenanceSchedules {
        Table,
        Id,
        AssetId,
        Title,
        Frequency,
        NextDueAt,
        LastPerformedAt,
        Active,
        Notes,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }
}

mod m20250117_000002_create_maintenance_logs {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaintenanceLogs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaintenanceLogs::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        // Cross-module reference, no FK; validated through
                        // the assets client
                        .col(ColumnDef::new(MaintenanceLogs::AssetId).uuid().not_null())
                        .col(ColumnDef::new(MaintenanceLogs::ScheduleId).uuid())
                        .col(
                            ColumnDef::new(MaintenanceLogs::PerformedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaintenanceLogs::PerformedBy).uuid())
                        .col(ColumnDef::new(MaintenanceLogs::Summary).string().not_null())
                        .col(ColumnDef::new(MaintenanceLogs::Notes).text())
                        .col(ColumnDef::new(MaintenanceLogs::Cost).decimal_len(12, 2))
                        .col(
                            ColumnDef::new(MaintenanceLogs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(MaintenanceLogs::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(MaintenanceLogs::DeletedAt)
                                .timestamp_with_time_zone(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_maintenance_logs_schedule")
                                .from(MaintenanceLogs::Table, MaintenanceLogs::ScheduleId)
                                .to(MaintenanceSchedules::Table, MaintenanceSchedules::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_maintenance_logs_asset_id")
                        .table(MaintenanceLogs::Table)
                        .col(MaintenanceLogs::AssetId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_maintenance_logs_schedule_id")
                        .table(MaintenanceLogs::Table)
                        .col(MaintenanceLogs::ScheduleId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_maintenance_logs_performed_at")
                        .table(MaintenanceLogs::Table)
                        .col(MaintenanceLogs::PerformedAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaintenanceLogs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MaintenanceLogs {
        Table,
        Id,
        AssetId,
        ScheduleId,
        PerformedAt,
        PerformedBy,
        Summary,
        Notes,
        Cost,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }

    #[derive(DeriveIden)]
    enum MaintenanceSchedules {
        Table,
        Id,
    }
}
