//! Storage layer - SeaORM entities, repositories and migrations

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use repositories::{
    SeaOrmAttachmentRepository, SeaOrmCommentRepository, SeaOrmWorkOrderRepository,
};
