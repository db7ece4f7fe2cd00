//! WASM bindings for euclid-core
//!
//! Provides JavaScript-accessible functions for rhythm generation and
//! notation parsing.

use crate::error::NotationError;
use crate::types::pattern::{parse_euclidean, Pattern, PatternSummary};
use crate::types::render::RenderStyle;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Outcome of parsing notation typed into an editor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotationResult {
    pub success: bool,
    pub pattern: Option<PatternSummary>,
    pub error: Option<NotationError>,
}

impl NotationResult {
    /// Parse `input` and summarize it with `style`
    pub fn evaluate(input: &str, style: &RenderStyle) -> Self {
        match parse_euclidean(input) {
            Ok(params) => NotationResult {
                success: true,
                pattern: Some(PatternSummary::new(&params.pattern(), style)),
                error: None,
            },
            Err(e) => NotationResult {
                success: false,
                pattern: None,
                error: Some(e),
            },
        }
    }
}

/// Pattern as bytes for typed-array consumers, 1 = onset
pub fn rhythm_bytes(accents: i64, total_steps: i64) -> Vec<u8> {
    Pattern::euclidean(accents, total_steps)
        .into_iter()
        .map(u8::from)
        .collect()
}

// ============================================================================
// WASM Bindings
// ============================================================================

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn rhythm_js(accents: i32, total_steps: i32) -> Vec<u8> {
    rhythm_bytes(accents as i64, total_steps as i64)
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn parse_notation(input: &str, style: Option<String>) -> JsValue {
    let style = style
        .as_deref()
        .and_then(RenderStyle::from_name)
        .unwrap_or_default();
    let result = NotationResult::evaluate(input, &style);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}
