//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Buildings table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "buildings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Unique short building code
    pub code: String,

    pub name: String,

    pub address: Option<String>,

    pub city: Option<String>,

    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    /// Soft delete timestamp
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "floor::Entity")]
    Floors,
}

impl Related<floor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Floors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Floors table module
pub mod floor {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "floors")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Owning building
        pub building_id: Uuid,

        /// Floor level; 0 is ground, negatives are basements
        pub level: i32,

        pub name: String,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,

        pub deleted_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::BuildingId",
            to = "super::Column::Id"
        )]
        Building,
        #[sea_orm(has_many = "super::space::Entity")]
        Spaces,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Building.def()
        }
    }

    impl Related<super::space::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Spaces.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Spaces table module
pub mod space {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "spaces")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Owning floor
        pub floor_id: Uuid,

        /// Space code, unique per floor among active rows
        pub code: String,

        pub name: String,

        /// Stored as string; parsed into the contract enum on read
        pub kind: String,

        pub capacity: Option<i32>,

        pub area_sqm: Option<f64>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,

        pub deleted_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::floor::Entity",
            from = "Column::FloorId",
            to = "super::floor::Column::Id"
        )]
        Floor,
    }

    impl Related<super::floor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Floor.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
