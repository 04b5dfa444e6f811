//! Test utilities for geotext.
//!
//! This crate provides test doubles for the two seams geotext leaves to the host:
//! text measurement and text rasterization.
//!
//! # Overview
//!
//! - `MockMeasurer` - deterministic [`TextMeasurer`](geotext::TextMeasurer) that counts its calls
//! - `RecordingRasterizer` - [`TextRasterizer`](geotext::TextRasterizer) that records every pass
//! - [`fixtures`] - tiles and labels shared by integration tests
//!
//! The doubles require the `mock` feature.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use geotext::prelude::*;
//! use geotext_test_utils::{MockMeasurer, RecordingRasterizer, fixtures};
//!
//! let measurer = MockMeasurer::fixed(100.0, 20.0);
//! let mut rasterizer = RecordingRasterizer::new();
//! let mut label = Label::with_defaults("Test", Position::from_degrees(0.0, 0.0)).unwrap();
//!
//! label.draw(&measurer, &Globe::default(), &fixtures::equator_tile(), &mut rasterizer);
//!
//! assert_eq!(measurer.call_count(), 1);
//! assert_eq!(rasterizer.pass_count(), 2);
//! # }
//! ```
//!
//! # Interior Mutability
//!
//! [`TextMeasurer::measure`](geotext::TextMeasurer::measure) takes `&self`, so the mock
//! measurer records calls through a `parking_lot::Mutex`. This keeps it `Send + Sync`.

pub mod fixtures;
#[cfg(feature = "mock")]
pub mod mock_measure;
#[cfg(feature = "mock")]
pub mod mock_raster;

#[cfg(feature = "mock")]
pub use mock_measure::*;
#[cfg(feature = "mock")]
pub use mock_raster::*;
