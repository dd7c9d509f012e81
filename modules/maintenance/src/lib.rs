//! Maintenance Module
//!
//! Planned maintenance schedules and the log of work actually performed.
//! Recording a log advances the owning asset's last-maintenance timestamp
//! through the assets client and, when the work was planned, rolls the
//! schedule's next due date forward by its frequency.

// Public exports
pub mod contract;
pub use contract::{
    client::MaintenanceApi, error::MaintenanceError, Frequency, LogListFilter, MaintenanceLog,
    MaintenanceSchedule, ScheduleListFilter,
};

pub mod module;
pub use module::MaintenanceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
