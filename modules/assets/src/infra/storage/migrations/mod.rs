//! Database migrations for the assets module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250117_000001_create_asset_categories::Migration),
            Box::new(m20250117_000002_create_assets::Migration),
        ]
    }
}

mod m20250117_000001_create_asset_categories {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AssetCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssetCategories::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        // No self-FK: the lft/rgt interval is authoritative
                        // and subtrees are removed in one statement
                        .col(ColumnDef::new(AssetCategories::ParentId).uuid())
                        .col(ColumnDef::new(AssetCategories::Name).string().not_null())
                        .col(ColumnDef::new(AssetCategories::Description).text())
                        .col(
                            ColumnDef::new(AssetCategories::Lft)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::Rgt)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AssetCategories::Depth).integer().not_null())
                        .col(
                            ColumnDef::new(AssetCategories::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_asset_categories_parent_id")
                        .table(AssetCategories::Table)
                        .col(AssetCategories::ParentId)
                        .to_owned(),
                )
                .await?;

            // Interval range scans drive subtree queries
            manager
                .create_index(
                    Index::create()
                        .name("idx_asset_categories_lft")
                        .table(AssetCategories::Table)
                        .col(AssetCategories::Lft)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AssetCategories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AssetCategories {
        Table,
        Id,
        ParentId,
        Name,
        Description,
        Lft,
        Rgt,
        Depth,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250117_000002_create_assets {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Assets::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Assets::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Assets::Code).string().not_null())
                        .col(ColumnDef::new(Assets::Name).string().not_null())
                        .col(ColumnDef::new(Assets::CategoryId).uuid().not_null())
                        // Cross-module reference, no FK; validated through
                        // the facilities client
                        .col(ColumnDef::new(Assets::SpaceId).uuid())
                        .col(ColumnDef::new(Assets::Status).string().not_null())
                        .col(ColumnDef::new(Assets::SerialNumber).string())
                        .col(ColumnDef::new(Assets::Manufacturer).string())
                        .col(ColumnDef::new(Assets::Model).string())
                        .col(ColumnDef::new(Assets::PurchasedAt).date())
                        .col(ColumnDef::new(Assets::PurchaseCost).decimal_len(12, 2))
                        .col(ColumnDef::new(Assets::WarrantyUntil).date())
                        .col(ColumnDef::new(Assets::Notes).text())
                        .col(ColumnDef::new(Assets::LastMaintainedAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(Assets::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Assets::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Assets::DeletedAt).timestamp_with_time_zone())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_category")
                                .from(Assets::Table, Assets::CategoryId)
                                .to(AssetCategories::Table, AssetCategories::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assets_code")
                        .table(Assets::Table)
                        .col(Assets::Code)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assets_category_id")
                        .table(Assets::Table)
                        .col(Assets::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assets_space_id")
                        .table(Assets::Table)
                        .col(Assets::SpaceId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_assets_status")
                        .table(Assets::Table)
                        .col(Assets::Status)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Assets::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Assets {
        Table,
        Id,
        Code,
        Name,
        CategoryId,
        SpaceId,
        Status,
        SerialNumber,
        Manufacturer,
        Model,
        PurchasedAt,
        PurchaseCost,
        WarrantyUntil,
        Notes,
        LastMaintainedAt,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }

    #[derive(DeriveIden)]
    enum AssetCategories {
        Table,
        Id,
    }
}
