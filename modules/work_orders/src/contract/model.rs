//! Contract models - pure domain types without serialization concerns

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of a work order.
///
/// Transitions are checked against a fixed allowed-set table; anything not
/// listed is refused. `completed` and `cancelled` and `closed` are terminal
/// except for the completed-to-closed handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkOrderStatus {
    Open,
    Assigned,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    Closed,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::Assigned => "assigned",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::OnHold => "on_hold",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
            WorkOrderStatus::Closed => "closed",
        }
    }

    /// States the order may move to from here.
    pub fn allowed_transitions(&self) -> &'static [WorkOrderStatus] {
        use WorkOrderStatus::*;
        match self {
            Open => &[Assigned, InProgress, OnHold, Cancelled],
            Assigned => &[Open, InProgress, OnHold, Cancelled],
            InProgress => &[OnHold, Completed, Cancelled],
            OnHold => &[Open, Assigned, InProgress, Cancelled],
            Completed => &[Closed],
            Cancelled => &[],
            Closed => &[],
        }
    }

    pub fn can_transition_to(&self, next: WorkOrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether work is still pending or underway
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            WorkOrderStatus::Completed | WorkOrderStatus::Cancelled | WorkOrderStatus::Closed
        )
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(WorkOrderStatus::Open),
            "assigned" => Ok(WorkOrderStatus::Assigned),
            "in_progress" => Ok(WorkOrderStatus::InProgress),
            "on_hold" => Ok(WorkOrderStatus::OnHold),
            "completed" => Ok(WorkOrderStatus::Completed),
            "cancelled" => Ok(WorkOrderStatus::Cancelled),
            "closed" => Ok(WorkOrderStatus::Closed),
            other => Err(format!("unknown work order status '{other}'")),
        }
    }
}

/// Urgency of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

/// A repair or maintenance task tracked against an asset or space.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    pub id: Uuid,
    /// Sequential human-facing code, `WO-000001` onward; never reused
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub requested_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub due_at: Option<DateTime<Utc>>,
    /// Stamped on the first transition into `in_progress`
    pub started_at: Option<DateTime<Utc>>,
    /// Stamped on the transition into `completed`
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl WorkOrder {
    /// Past its due date while work is still pending or underway
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        self.status.is_active() && self.due_at.is_some_and(|due| due < as_of)
    }
}

/// A note left on a work order. Hard-deleted; there is no history to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderComment {
    pub id: Uuid,
    pub work_order_id: Uuid,
    pub author_id: Option<Uuid>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A file stored against a work order. The bytes live on disk under the
/// configured uploads directory; the row records where and what.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderAttachment {
    pub id: Uuid,
    pub work_order_id: Uuid,
    /// The name the file was uploaded under, echoed back on download
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub checksum_sha256: String,
    /// Path relative to the uploads root
    pub stored_path: String,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a work order
#[derive(Debug, Clone)]
pub struct NewWorkOrder {
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub priority: Priority,
    pub requested_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub due_at: Option<DateTime<Utc>>,
}

/// Input for updating a work order; status, assignment and attribution go
/// through their own operations.
#[derive(Debug, Clone)]
pub struct UpdateWorkOrder {
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub priority: Priority,
    pub due_at: Option<DateTime<Utc>>,
}

/// Input for adding a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_id: Option<Uuid>,
    pub body: String,
}

/// An uploaded file, ready to be stored
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub uploaded_by: Option<Uuid>,
}

/// Filters for listing work orders
#[derive(Debug, Clone, Default)]
pub struct WorkOrderListFilter {
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Uuid>,
    pub asset_id: Option<Uuid>,
    pub space_id: Option<Uuid>,
    /// Only orders past their due date and still active
    pub overdue: bool,
}
