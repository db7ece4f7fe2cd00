//! Euclidean rhythm patterns
//!
//! A [`Pattern`] is one cycle of onset/rest steps. Patterns come from the
//! Bjorklund generator ([`rhythm`]) directly or from notation like `(3,8)`.

mod core;
mod euclidean;
mod parser;
mod summary;


// Re-export public types
pub use self::core::Pattern;
pub use euclidean::rhythm;
pub use parser::{parse_euclidean, EuclideanParams, MAX_STEPS};
pub use summary::PatternSummary;
