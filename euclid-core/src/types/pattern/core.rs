//! Pattern struct - an immutable cycle of onset/rest steps.

use super::euclidean::rhythm;
use super::parser::parse_euclidean;
use crate::error::NotationError;
use crate::types::render::RenderStyle;
use crate::types::time::{time, Arc, Time};
use std::fmt;

/// One cycle of steps, `true` = onset, `false` = rest.
///
/// Index 0 is the first step of the cycle. Transformations return new
/// patterns and leave the original untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    steps: Vec<bool>,
}

impl Pattern {
    /// Euclidean rhythm E(accents, steps)
    pub fn euclidean(accents: i64, total_steps: i64) -> Self {
        Self {
            steps: rhythm(accents, total_steps),
        }
    }

    /// Wrap an arbitrary step sequence
    pub fn from_steps(steps: Vec<bool>) -> Self {
        Self { steps }
    }

    /// Parse notation like `(3,8)` or `(5,8,2)` and generate the pattern
    pub fn parse(input: &str) -> Result<Self, NotationError> {
        Ok(parse_euclidean(input)?.pattern())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[bool] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, bool> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<bool> {
        self.steps
    }

    /// Number of onset steps
    pub fn accents(&self) -> usize {
        self.steps.iter().filter(|&&s| s).count()
    }

    /// Indices of onset steps, ascending
    pub fn onsets(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect()
    }

    /// Cyclic distance from each onset to the next one.
    ///
    /// The last gap wraps around to the first onset, so the gaps always sum
    /// to `len()` when there is at least one onset.
    pub fn gaps(&self) -> Vec<usize> {
        let onsets = self.onsets();
        let Some(&first) = onsets.first() else {
            return vec![];
        };

        let mut gaps: Vec<usize> = onsets.windows(2).map(|w| w[1] - w[0]).collect();
        let last = onsets[onsets.len() - 1];
        gaps.push(self.len() - last + first);
        gaps
    }

    /// True when the gaps take at most two values that differ by exactly one
    pub fn is_maximally_even(&self) -> bool {
        let gaps = self.gaps();
        match (gaps.iter().min(), gaps.iter().max()) {
            (Some(min), Some(max)) => max - min <= 1,
            _ => true,
        }
    }

    /// Whether the sequencer should trigger on `step`, wrapping around the cycle
    pub fn is_onset(&self, step: usize) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.steps[step % self.steps.len()]
    }

    /// Rotate so the pattern starts `n` steps later
    pub fn rotate_left(&self, n: usize) -> Pattern {
        let mut steps = self.steps.clone();
        if !steps.is_empty() {
            let len = steps.len();
            steps.rotate_left(n % len);
        }
        Pattern { steps }
    }

    /// Rotate so the pattern starts `n` steps earlier
    pub fn rotate_right(&self, n: usize) -> Pattern {
        let mut steps = self.steps.clone();
        if !steps.is_empty() {
            let len = steps.len();
            steps.rotate_right(n % len);
        }
        Pattern { steps }
    }

    /// Signed rotation: positive rotates left, negative rotates right
    pub fn rotate(&self, n: i64) -> Pattern {
        if self.steps.is_empty() {
            return self.clone();
        }
        // Reduce before narrowing to usize, which is 32 bits on wasm32
        let len = self.len() as i64;
        self.rotate_left(n.rem_euclid(len) as usize)
    }

    /// Swap onsets and rests
    pub fn invert(&self) -> Pattern {
        Pattern {
            steps: self.steps.iter().map(|&s| !s).collect(),
        }
    }

    /// Start time of each onset as a fraction of one cycle
    pub fn onset_times(&self) -> Vec<Time> {
        let len = self.len() as i64;
        self.onsets()
            .into_iter()
            .map(|i| time(i as i64, len))
            .collect()
    }

    /// The slot each onset occupies within one cycle: [i/len, (i+1)/len)
    pub fn step_arcs(&self) -> Vec<Arc> {
        let len = self.len() as i64;
        self.onsets()
            .into_iter()
            .map(|i| Arc::new(time(i as i64, len), time(i as i64 + 1, len)))
            .collect()
    }

    /// Draw the pattern with `style`
    pub fn render(&self, style: &RenderStyle) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        for (i, &step) in self.steps.iter().enumerate() {
            if i > 0 {
                if let Some(sep) = style.separator {
                    out.push(sep);
                }
            }
            out.push(style.glyph(step));
        }
        out
    }

    /// Draw the pattern with onsets highlighted for the terminal
    #[cfg(feature = "colored")]
    pub fn colored(&self, style: &RenderStyle) -> String {
        use colored::*;

        let mut out = String::new();
        for (i, &step) in self.steps.iter().enumerate() {
            if i > 0 {
                if let Some(sep) = style.separator {
                    out.push(sep);
                }
            }
            let glyph = style.glyph(step).to_string();
            if step {
                out.push_str(&glyph.bright_yellow().bold().to_string());
            } else {
                out.push_str(&glyph.dimmed().to_string());
            }
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderStyle::default()))
    }
}

impl From<Vec<bool>> for Pattern {
    fn from(steps: Vec<bool>) -> Self {
        Pattern::from_steps(steps)
    }
}

impl From<Pattern> for Vec<bool> {
    fn from(pattern: Pattern) -> Self {
        pattern.steps
    }
}

impl IntoIterator for Pattern {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
