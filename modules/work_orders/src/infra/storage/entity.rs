//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Work orders table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Sequential human-facing code, unique across all rows ever written
    pub code: String,

    pub title: String,

    pub description: Option<String>,

    /// Cross-module reference; validated through the assets client
    pub asset_id: Option<Uuid>,

    /// Cross-module reference; validated through the facilities client
    pub space_id: Option<Uuid>,

    /// Stored as string; parsed into the contract enum on read
    pub status: String,

    /// Stored as string; parsed into the contract enum on read
    pub priority: String,

    /// Cross-module reference; validated through the accounts client
    pub requested_by: Option<Uuid>,

    /// Cross-module reference; validated through the accounts client
    pub assigned_to: Option<Uuid>,

    pub due_at: Option<DateTimeUtc>,

    pub started_at: Option<DateTimeUtc>,

    pub completed_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "comment::Entity")]
    Comments,
    #[sea_orm(has_many = "attachment::Entity")]
    Attachments,
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Work order comments table module
pub mod comment {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "work_order_comments")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub work_order_id: Uuid,

        /// Cross-module attribution, taken from the authenticated caller
        pub author_id: Option<Uuid>,

        pub body: String,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::WorkOrderId",
            to = "super::Column::Id"
        )]
        WorkOrder,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::WorkOrder.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Work order attachments table module
pub mod attachment {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "work_order_attachments")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub work_order_id: Uuid,

        pub file_name: String,

        pub content_type: String,

        pub size_bytes: i64,

        pub checksum_sha256: String,

        /// Path relative to the uploads root
        pub stored_path: String,

        /// Cross-module attribution, taken from the authenticated caller
        pub uploaded_by: Option<Uuid>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::WorkOrderId",
            to = "super::Column::Id"
        )]
        WorkOrder,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::WorkOrder.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
