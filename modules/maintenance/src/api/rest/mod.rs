//! REST surface for maintenance schedules and logs

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
