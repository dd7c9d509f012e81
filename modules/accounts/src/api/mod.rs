//! API layer - REST and native interfaces

pub mod native;
pub mod rest;
