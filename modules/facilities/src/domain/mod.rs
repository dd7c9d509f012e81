//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, FacilityEvent, NoOpEventPublisher, TracingEventPublisher};
pub use repository::{BuildingRepository, FloorRepository, SpaceRepository};
pub use service::Service;
