//! Contract layer - transport-agnostic models and interfaces

pub mod client;
pub mod error;
pub mod model;

pub use client::MaintenanceApi;
pub use error::MaintenanceError;
pub use model::{
    Frequency, LogListFilter, MaintenanceLog, MaintenanceSchedule, NewLog, NewSchedule,
    ScheduleListFilter, UpdateLog, UpdateSchedule,
};
