//! API layer - REST handlers and native client

pub mod native;
pub mod rest;
