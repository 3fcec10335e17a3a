//! # QRelief Grid
//!
//! Binary grid acquisition for the QR relief pipeline.
//! Normalizes both grid origins (generated symbol, imported file) into the
//! same in-memory matrix shape consumed by `qrelief-mesh`.
//!
//! ## Architecture
//!
//! ```text
//! GridSource (Generated | Imported) → qrelief-grid (BinaryGrid) → qrelief-mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qrelief_grid::{encode, EncodeOptions};
//!
//! let grid = encode("HELLO", &EncodeOptions::default()).unwrap();
//! assert_eq!(grid.rows(), grid.cols());
//! ```

pub mod encode;
pub mod error;
pub mod grid;
pub mod import;
pub mod source;

// Re-export public API
pub use encode::{encode, EncodeMode, EncodeOptions, ErrorCorrection};
pub use error::GridError;
pub use grid::BinaryGrid;
pub use import::load_from_file;
pub use source::GridSource;
