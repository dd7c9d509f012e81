//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod tree;
pub mod validation;

pub use events::{AssetEvent, EventPublisher, NoOpEventPublisher, TracingEventPublisher};
pub use repository::{AssetRepository, AssetSearch, CategoryRepository};
pub use service::Service;
