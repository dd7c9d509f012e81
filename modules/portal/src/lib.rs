//! Portal module
//!
//! Read-only HTML views over the other modules' contract clients: a
//! dashboard, buildings with their floors and spaces, assets with their
//! maintenance history, and work orders with their comments. Pages are
//! rendered server-side from embedded tera templates; there are no write
//! actions and no authentication.

pub mod module;
pub use module::{PortalModule, PortalState};

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod handlers;
#[doc(hidden)]
pub mod routes;
#[doc(hidden)]
pub mod templates;
#[doc(hidden)]
pub mod views;
