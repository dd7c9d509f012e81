//! Siteworks module kit
//!
//! Small shared layer the domain modules and the server binary build on:
//! module lifecycle traits, the RFC-9457 problem response type, pagination
//! query handling, bearer-token auth, and database connection helpers.

pub mod auth;
pub mod db;
pub mod module;
pub mod pagination;
pub mod problem;

pub use auth::{AuthContext, JwtCodec, Role};
pub use module::{DbModule, RestModule};
pub use pagination::PageQuery;
pub use problem::Problem;
