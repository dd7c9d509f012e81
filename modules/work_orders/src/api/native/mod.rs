//! Native API - in-process client for other modules

pub mod client;

pub use client::NativeClient;
