//! Domain layer - business logic and repository interfaces

pub mod events;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

pub use events::{EventPublisher, NoOpEventPublisher, TracingEventPublisher, WorkOrderEvent};
pub use repository::{
    AttachmentRepository, CommentRepository, WorkOrderRepository, WorkOrderSearch,
};
pub use service::Service;
pub use store::AttachmentStore;
