//! Common library for the footpath route planner.
//!
//! This crate provides shared functionality across the footpath services:
//! geographic value types, configuration management, error handling, and
//! telemetry utilities.

// Configuration management
pub mod config;
pub use config::Config;

// Error handling types
pub mod error;
pub use error::{FootpathError, Result};

// Telemetry and observability
pub mod telemetry;
pub use telemetry::init_tracing;

// Geographic value types
pub mod geo;
pub use geo::{Bounds, GeoPoint};
