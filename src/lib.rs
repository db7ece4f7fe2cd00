//! # Euclid
//!
//! Terminal front end for Euclidean rhythm generation. Patterns come from
//! `euclid-core`; this crate adds a command registry, an interactive REPL and
//! one-shot evaluation of command-line arguments.
//!
//! ## Modules
//!
//! - `commands`: Command registry and handlers (`info`, `rotate`, `invert`,
//!   `style`, `help`, `quit`). Lines that are not commands are evaluated as
//!   notation like `(3,8)`.
//! - `repl`: The Read-Eval-Print Loop and one-shot evaluation.

pub mod commands;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use euclid_core::{rhythm, EuclideanParams, Pattern, RenderStyle};
