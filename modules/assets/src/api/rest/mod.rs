//! REST surface for the category tree and the asset registry

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
