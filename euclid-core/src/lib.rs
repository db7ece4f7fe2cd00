//! # Euclid Core
//!
//! WASM-compatible core library for Euclidean rhythm generation.
//! Produces onset/rest step sequences with Bjorklund's algorithm; it never
//! touches audio, files or clocks.
//!
//! ## Features
//!
//! - **serde**: Enable serialization for web interop
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use euclid_core::{rhythm, Pattern};
//!
//! assert_eq!(rhythm(2, 5), vec![true, false, true, false, false]);
//!
//! let tresillo = Pattern::parse("(3,8)").unwrap();
//! assert_eq!(tresillo.to_string(), "x..x..x.");
//! assert_eq!(tresillo.gaps(), vec![3, 3, 2]);
//! ```

pub mod error;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use error::NotationError;
pub use types::{rhythm, EuclideanParams, Pattern, PatternSummary, RenderStyle};
