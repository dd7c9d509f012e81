//! View models handed to the templates
//!
//! Contract models are flattened into display-ready rows here, so the
//! templates never format dates, enums or missing values themselves.

use assets::Asset;
use chrono::{DateTime, Utc};
use facilities::{Building, Floor, Space};
use maintenance::{MaintenanceLog, MaintenanceSchedule};
use serde::Serialize;
use uuid::Uuid;
use work_orders::{WorkOrder, WorkOrderComment};

pub fn date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn date_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn opt_date(ts: Option<DateTime<Utc>>) -> String {
    ts.map(date).unwrap_or_default()
}

fn opt_date_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(date_time).unwrap_or_default()
}

/// Entity counts shown on the dashboard cards
#[derive(Debug, Serialize)]
pub struct CountsView {
    pub buildings: u64,
    pub floors: u64,
    pub spaces: u64,
    pub assets: u64,
    pub open_work_orders: u64,
    pub overdue_maintenance: u64,
}

#[derive(Debug, Serialize)]
pub struct BuildingRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub notes: String,
}

impl From<Building> for BuildingRow {
    fn from(building: Building) -> Self {
        Self {
            id: building.id,
            code: building.code,
            name: building.name,
            city: building.city.unwrap_or_default(),
            address: building.address.unwrap_or_default(),
            notes: building.notes.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FloorRow {
    pub id: Uuid,
    pub level: i32,
    pub name: String,
}

impl From<Floor> for FloorRow {
    fn from(floor: Floor) -> Self {
        Self {
            id: floor.id,
            level: floor.level,
            name: floor.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpaceRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub kind: String,
    pub capacity: String,
    pub area_sqm: String,
    /// Label of the floor the space sits on, resolved by the handler
    pub floor: String,
}

impl SpaceRow {
    pub fn from_space(space: Space, floor: String) -> Self {
        Self {
            id: space.id,
            code: space.code,
            name: space.name,
            kind: space.kind.as_str().to_string(),
            capacity: space.capacity.map(|n| n.to_string()).unwrap_or_default(),
            area_sqm: space
                .area_sqm
                .map(|a| format!("{a:.1}"))
                .unwrap_or_default(),
            floor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssetRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub status: String,
    pub last_maintained: String,
}

impl From<Asset> for AssetRow {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            code: asset.code,
            name: asset.name,
            status: asset.status.as_str().to_string(),
            last_maintained: opt_date(asset.last_maintained_at),
        }
    }
}

/// Full asset card for the detail page; category and space labels are
/// resolved by the handler
#[derive(Debug, Serialize)]
pub struct AssetView {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub status: String,
    pub category: String,
    pub space: String,
    pub space_id: Option<Uuid>,
    pub serial_number: String,
    pub manufacturer: String,
    pub model: String,
    pub purchased_at: String,
    pub purchase_cost: String,
    pub warranty_until: String,
    pub notes: String,
    pub last_maintained: String,
}

impl AssetView {
    pub fn from_asset(asset: Asset, category: String, space: String) -> Self {
        Self {
            id: asset.id,
            code: asset.code,
            name: asset.name,
            status: asset.status.as_str().to_string(),
            category,
            space,
            space_id: asset.space_id,
            serial_number: asset.serial_number.unwrap_or_default(),
            manufacturer: asset.manufacturer.unwrap_or_default(),
            model: asset.model.unwrap_or_default(),
            purchased_at: asset
                .purchased_at
                .map(|d| d.to_string())
                .unwrap_or_default(),
            purchase_cost: asset
                .purchase_cost
                .map(|c| c.to_string())
                .unwrap_or_default(),
            warranty_until: asset
                .warranty_until
                .map(|d| d.to_string())
                .unwrap_or_default(),
            notes: asset.notes.unwrap_or_default(),
            last_maintained: opt_date(asset.last_maintained_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogRow {
    pub performed_at: String,
    pub summary: String,
    pub notes: String,
    pub cost: String,
}

impl From<MaintenanceLog> for LogRow {
    fn from(log: MaintenanceLog) -> Self {
        Self {
            performed_at: date(log.performed_at),
            summary: log.summary,
            notes: log.notes.unwrap_or_default(),
            cost: log.cost.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleRow {
    pub title: String,
    pub frequency: String,
    pub next_due_at: String,
    pub asset_id: Uuid,
}

impl From<MaintenanceSchedule> for ScheduleRow {
    fn from(schedule: MaintenanceSchedule) -> Self {
        Self {
            title: schedule.title,
            frequency: schedule.frequency.as_str().to_string(),
            next_due_at: date(schedule.next_due_at),
            asset_id: schedule.asset_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkOrderRow {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub due_at: String,
    pub overdue: bool,
    pub created_at: String,
}

impl WorkOrderRow {
    pub fn from_order(order: WorkOrder, as_of: DateTime<Utc>) -> Self {
        let overdue = order.is_overdue(as_of);
        Self {
            id: order.id,
            code: order.code,
            title: order.title,
            status: order.status.as_str().to_string(),
            priority: order.priority.as_str().to_string(),
            due_at: opt_date(order.due_at),
            overdue,
            created_at: date(order.created_at),
        }
    }
}

/// Full work order card for the detail page; references are resolved to
/// labels by the handler
#[derive(Debug, Serialize)]
pub struct WorkOrderView {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub overdue: bool,
    pub asset: String,
    pub asset_id: Option<Uuid>,
    pub space: String,
    pub space_id: Option<Uuid>,
    pub requested_by: String,
    pub assigned_to: String,
    pub due_at: String,
    pub started_at: String,
    pub completed_at: String,
    pub created_at: String,
}

impl WorkOrderView {
    pub fn from_order(
        order: WorkOrder,
        as_of: DateTime<Utc>,
        asset: String,
        space: String,
        requested_by: String,
        assigned_to: String,
    ) -> Self {
        let overdue = order.is_overdue(as_of);
        Self {
            id: order.id,
            code: order.code,
            title: order.title,
            description: order.description.unwrap_or_default(),
            status: order.status.as_str().to_string(),
            priority: order.priority.as_str().to_string(),
            overdue,
            asset,
            asset_id: order.asset_id,
            space,
            space_id: order.space_id,
            requested_by,
            assigned_to,
            due_at: opt_date(order.due_at),
            started_at: opt_date_time(order.started_at),
            completed_at: opt_date_time(order.completed_at),
            created_at: date_time(order.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentRow {
    pub author: String,
    pub body: String,
    pub created_at: String,
}

impl CommentRow {
    pub fn from_comment(comment: WorkOrderComment, author: String) -> Self {
        Self {
            author,
            body: comment.body,
            created_at: date_time(comment.created_at),
        }
    }
}
