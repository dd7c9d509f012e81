//! Contract layer - transport-agnostic models and interfaces

pub mod client;
pub mod error;
pub mod model;

pub use client::AssetsApi;
pub use error::AssetsError;
pub use model::{
    Asset, AssetCategory, AssetListFilter, AssetStatus, NewAsset, NewCategory, UpdateAsset,
    UpdateCategory,
};
