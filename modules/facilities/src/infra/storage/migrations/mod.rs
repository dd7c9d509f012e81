//! Database migrations for the facilities module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Each module keeps its own bookkeeping table; they share one database.
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_facilities").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250116_000001_create_buildings::Migration),
            Box::new(m20250116_000002_create_floors::Migration),
            Box::new(m20250116_000003_create_spaces::Migration),
        ]
    }
}

mod m20250116_000001_create_buildings {
    use super::*;

    pub struct Migration;

    // The derive would name every inline migration after this file ("mod").
    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250116_000001_create_buildings"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Buildings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Buildings::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Buildings::Code).string().not_null())
                        .col(ColumnDef::new(Buildings::Name).string().not_null())
                        .col(ColumnDef::new(Buildings::Address).string())
                        .col(ColumnDef::new(Buildings::City).string())
                        .col(ColumnDef::new(Buildings::Notes).text())
                        .col(
                            ColumnDef::new(Buildings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Buildings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Buildings::DeletedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            // Plain index; uniqueness among active rows is checked in the service
            manager
                .create_index(
                    Index::create()
                        .name("idx_buildings_code")
                        .table(Buildings::Table)
                        .col(Buildings::Code)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Buildings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Buildings {
        Table,
        Id,
        Code,
        Name,
        Address,
        City,
        Notes,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }
}

mod m20250116_000002_create_floors {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250116_000002_create_floors"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Floors::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Floors::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Floors::BuildingId).uuid().not_null())
                        .col(ColumnDef::new(Floors::Level).integer().not_null())
                        .col(ColumnDef::new(Floors::Name).string().not_null())
                        .col(
                            ColumnDef::new(Floors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Floors::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Floors::DeletedAt).timestamp_with_time_zone())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_floors_building")
                                .from(Floors::Table, Floors::BuildingId)
                                .to(Buildings::Table, Buildings::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_floors_building_id")
                        .table(Floors::Table)
                        .col(Floors::BuildingId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Floors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Floors {
        Table,
        Id,
        BuildingId,
        Level,
        Name,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }

    #[derive(DeriveIden)]
    enum Buildings {
        Table,
        Id,
    }
}

mod m20250116_000003_create_spaces {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250116_000003_create_spaces"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Spaces::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Spaces::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Spaces::FloorId).uuid().not_null())
                        .col(ColumnDef::new(Spaces::Code).string().not_null())
                        .col(ColumnDef::new(Spaces::Name).string().not_null())
                        .col(ColumnDef::new(Spaces::Kind).string().not_null())
                        .col(ColumnDef::new(Spaces::Capacity).integer())
                        .col(ColumnDef::new(Spaces::AreaSqm).double())
                        .col(
                            ColumnDef::new(Spaces::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Spaces::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Spaces::DeletedAt).timestamp_with_time_zone())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_spaces_floor")
                                .from(Spaces::Table, Spaces::FloorId)
                                .to(Floors::Table, Floors::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_spaces_floor_id")
                        .table(Spaces::Table)
                        .col(Spaces::FloorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_spaces_code")
                        .table(Spaces::Table)
                        .col(Spaces::Code)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Spaces::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Spaces {
        Table,
        Id,
        FloorId,
        Code,
        Name,
        Kind,
        Capacity,
        AreaSqm,
        CreatedAt,
        UpdatedAt,
        DeletedAt,
    }

    #[derive(DeriveIden)]
    enum Floors {
        Table,
        Id,
    }
}
