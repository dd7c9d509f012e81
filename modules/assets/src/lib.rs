//! Assets Module
//!
//! Asset registry for the back office: a nested-set category forest and the
//! assets filed under it. Categories keep left/right traversal indexes so
//! subtree queries are single range scans; assets carry lifecycle status and
//! a denormalized last-maintenance timestamp advanced by maintenance cascades.

// Public exports
pub mod contract;
pub use contract::{
    client::AssetsApi, error::AssetsError, Asset, AssetCategory, AssetListFilter, AssetStatus,
};

pub mod module;
pub use module::AssetsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
