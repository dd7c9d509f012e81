//! Siteworks server: wiring, configuration and operational helpers
//!
//! The binary in `main.rs` is a thin CLI over this library; the end-to-end
//! tests drive the same [`app::App`] the `serve` command boots.

pub mod app;
pub mod backup;
pub mod config;
pub mod openapi;
