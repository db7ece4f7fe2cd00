//! Text rendering styles for patterns
//!
//! Pure data describing how onsets and rests are drawn. Shared by the
//! terminal front end and web-based editors.

/// How a pattern is drawn as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderStyle {
    /// Character drawn for an onset step
    pub onset: char,
    /// Character drawn for a rest step
    pub rest: char,
    /// Optional character placed between steps
    pub separator: Option<char>,
}

impl RenderStyle {
    /// Names accepted by [`RenderStyle::from_name`]
    pub const PRESETS: [&'static str; 5] = ["x", "binary", "box", "drum", "spaced"];

    /// Create a custom style
    pub fn new(onset: char, rest: char) -> Self {
        Self {
            onset,
            rest,
            separator: None,
        }
    }

    /// Place `separator` between steps
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Look up a preset by name (case-insensitive)
    pub fn from_name(s: &str) -> Option<RenderStyle> {
        match s.to_lowercase().as_str() {
            "x" | "default" => Some(RenderStyle::new('x', '.')),
            "binary" | "bin" => Some(RenderStyle::new('1', '0')),
            "box" => Some(RenderStyle::new('■', '□')),
            "drum" => Some(RenderStyle::new('X', '-')),
            "spaced" => Some(RenderStyle::new('x', '.').with_separator(' ')),
            _ => None,
        }
    }

    /// Canonical preset name, or "custom"
    pub fn name(&self) -> &'static str {
        Self::PRESETS
            .iter()
            .copied()
            .find(|name| Self::from_name(name).as_ref() == Some(self))
            .unwrap_or("custom")
    }

    /// Character for one step
    pub fn glyph(&self, onset: bool) -> char {
        if onset {
            self.onset
        } else {
            self.rest
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::new('x', '.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(RenderStyle::from_name("BOX"), Some(RenderStyle::new('■', '□')));
        assert_eq!(RenderStyle::from_name("default"), Some(RenderStyle::default()));
        assert_eq!(RenderStyle::from_name("nope"), None);
    }

    #[test]
    fn test_preset_names_roundtrip() {
        for name in RenderStyle::PRESETS {
            let style = RenderStyle::from_name(name).unwrap();
            assert_eq!(style.name(), name);
        }
        assert_eq!(RenderStyle::new('o', '-').name(), "custom");
    }
}
