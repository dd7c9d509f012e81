//! API layer - REST and native in-process surfaces

pub mod native;
pub mod rest;
