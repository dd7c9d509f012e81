//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, MaintenanceEvent, NoOpEventPublisher, TracingEventPublisher};
pub use repository::{LogRepository, ScheduleRepository};
pub use service::Service;
