//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Asset categories table entity (nested-set forest)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "asset_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Parent node; NULL for roots
    pub parent_id: Option<Uuid>,

    pub name: String,

    pub description: Option<String>,

    /// Left traversal index
    pub lft: i64,

    /// Right traversal index
    pub rgt: i64,

    /// 0 for roots
    pub depth: i32,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "asset::Entity")]
    Assets,
}

impl Related<asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Assets table module
pub mod asset {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "assets")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Asset tag, unique per active row set
        pub code: String,

        pub name: String,

        pub category_id: Uuid,

        /// Cross-module reference; validated through the facilities client
        pub space_id: Option<Uuid>,

        /// Stored as string; parsed into the contract enum on read
        pub status: String,

        pub serial_number: Option<String>,

        pub manufacturer: Option<String>,

        pub model: Option<String>,

        pub purchased_at: Option<Date>,

        pub purchase_cost: Option<Decimal>,

        pub warranty_until: Option<Date>,

        pub notes: Option<String>,

        /// Denormalized, advanced by maintenance cascades
        pub last_maintained_at: Option<DateTimeUtc>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,

        pub deleted_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::CategoryId",
            to = "super::Column::Id"
        )]
        Category,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
