//! REST surface for work orders, comments and attachments

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
