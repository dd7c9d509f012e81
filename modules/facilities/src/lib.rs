//! Facilities module
//!
//! Owns the physical-site registry: buildings, their floors, and the spaces on
//! each floor (the Building → Floor → Space chain). Other modules reference
//! spaces through the [`contract::FacilitiesApi`] client.

// Public exports
pub mod contract;
pub use contract::{
    Building, FacilitiesApi, FacilitiesError, FacilityCounts, Floor, Space, SpaceKind,
};

pub mod module;
pub use module::FacilitiesModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
