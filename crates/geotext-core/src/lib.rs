//! Geotext Core
//!
//! This crate contains the shared utilities for the geotext workspace:
//! logging setup, profiling hooks, math re-exports and the `Size` type shared by measurement and placement.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
