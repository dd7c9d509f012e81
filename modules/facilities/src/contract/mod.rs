//! Contract layer - public API for inter-module communication
//!
//! Transport-agnostic models and the native client trait. NO serde derives on
//! models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::FacilitiesApi;
pub use error::FacilitiesError;
pub use model::{
    Building, FacilityCounts, Floor, NewBuilding, NewFloor, NewSpace, Space, SpaceKind,
    UpdateBuilding, UpdateFloor, UpdateSpace,
};
