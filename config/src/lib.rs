//! # Config Crate
//!
//! Centralized configuration constants for the QR relief pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_CELL_SIZE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the default cell size when the caller supplies none
//! let user_cell_size: Option<f64> = None;
//! let cell_size = user_cell_size.unwrap_or(DEFAULT_CELL_SIZE);
//! assert_eq!(cell_size, DEFAULT_CELL_SIZE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Convention**: Lengths are centimeters throughout the pipeline
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
