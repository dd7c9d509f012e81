//! Domain layer - business logic

pub mod events;
pub mod password;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{AccountEvent, EventPublisher, NoOpEventPublisher, TracingEventPublisher};
pub use repository::{Credential, UserRepository};
pub use service::Service;
