//! PatternSummary - a serializable snapshot of a pattern and its views.

use super::core::Pattern;
use crate::types::render::RenderStyle;

/// Everything an editor or front end usually shows about a pattern
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSummary {
    pub steps: Vec<bool>,
    pub accents: usize,
    pub onsets: Vec<usize>,
    pub gaps: Vec<usize>,
    pub maximally_even: bool,
    pub text: String,
}

impl PatternSummary {
    pub fn new(pattern: &Pattern, style: &RenderStyle) -> Self {
        Self {
            steps: pattern.steps().to_vec(),
            accents: pattern.accents(),
            onsets: pattern.onsets(),
            gaps: pattern.gaps(),
            maximally_even: pattern.is_maximally_even(),
            text: pattern.render(style),
        }
    }
}

impl From<&Pattern> for PatternSummary {
    fn from(pattern: &Pattern) -> Self {
        PatternSummary::new(pattern, &RenderStyle::default())
    }
}
