// euclid-core/src/types/mod.rs

pub mod pattern;
pub mod render;
pub mod time;

pub use pattern::{parse_euclidean, rhythm, EuclideanParams, Pattern, PatternSummary};
pub use render::RenderStyle;
pub use time::{Arc, Time};
