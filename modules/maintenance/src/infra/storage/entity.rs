//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Maintenance schedules table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "maintenance_schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Cross-module reference; validated through the assets client
    pub asset_id: Uuid,

    pub title: String,

    /// Stored as string; parsed into the contract enum on read
    pub frequency: String,

    pub next_due_at: DateTimeUtc,

    pub last_performed_at: Option<DateTimeUtc>,

    pub active: bool,

    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "log::Entity")]
    Logs,
}

impl Related<log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Maintenance logs table module
pub mod log {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "maintenance_logs")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Cross-module reference; validated through the assets client
        pub asset_id: Uuid,

        /// Set when the work was planned by a schedule
        pub schedule_id: Option<Uuid>,

        pub performed_at: DateTimeUtc,

        /// Cross-module attribution, recorded as-is
        pub performed_by: Option<Uuid>,

        pub summary: String,

        pub notes: Option<String>,

        pub cost: Option<Decimal>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,

        pub deleted_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::ScheduleId",
            to = "super::Column::Id"
        )]
        Schedule,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Schedule.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
