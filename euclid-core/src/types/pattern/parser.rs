//! Parser for Euclidean mini-notation.
//!
//! Accepts `(accents,steps)` and `(accents,steps,rotation)`, or the same
//! numbers bare, separated by commas or whitespace: `3 8`, `5,8,2`.

use super::core::Pattern;
use crate::error::NotationError;
use std::fmt;
use std::str::FromStr;

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Largest step count accepted from notation.
///
/// Keeps typed input from requesting patterns too large to allocate. The
/// generator itself has no limit.
pub const MAX_STEPS: i64 = 65536;

/// Parsed Euclidean notation.
///
/// Values are kept exactly as written; zero, negative or oversized accents
/// resolve through the generator's edge-case rules. Only `steps` above
/// [`MAX_STEPS`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuclideanParams {
    pub accents: i64,
    pub steps: i64,
    /// Positive rotates left, negative rotates right
    pub rotation: i64,
}

impl EuclideanParams {
    pub fn new(accents: i64, steps: i64) -> Self {
        Self {
            accents,
            steps,
            rotation: 0,
        }
    }

    pub fn with_rotation(mut self, rotation: i64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Generate the rhythm and apply the rotation
    pub fn pattern(&self) -> Pattern {
        Pattern::euclidean(self.accents, self.steps).rotate(self.rotation)
    }
}

impl fmt::Display for EuclideanParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rotation == 0 {
            write!(f, "({},{})", self.accents, self.steps)
        } else {
            write!(f, "({},{},{})", self.accents, self.steps, self.rotation)
        }
    }
}

impl FromStr for EuclideanParams {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_euclidean(s)
    }
}

/// Parse Euclidean notation into its numbers
pub fn parse_euclidean(input: &str) -> Result<EuclideanParams, NotationError> {
    let end = input.len();
    let mut chars = input.char_indices().peekable();

    skip_whitespace(&mut chars);
    let params = if peek_char(&mut chars) == Some('(') {
        chars.next(); // consume '('
        let params = parse_params(&mut chars, end, true)?;
        skip_whitespace(&mut chars);
        match chars.next() {
            Some((_, ')')) => params,
            Some((pos, c)) => {
                return Err(NotationError::new(
                    format!("Expected ')' but found '{}'", c),
                    pos,
                ))
            }
            None => {
                return Err(NotationError::new(
                    "Expected ')' to close Euclidean pattern",
                    end,
                ))
            }
        }
    } else {
        parse_params(&mut chars, end, false)?
    };

    skip_whitespace(&mut chars);
    if let Some((pos, c)) = chars.next() {
        return Err(NotationError::new(
            format!("Unexpected '{}' after Euclidean pattern", c),
            pos,
        ));
    }

    Ok(params)
}

/// Parse `accents sep steps [sep rotation]`
fn parse_params(
    chars: &mut Chars,
    end: usize,
    parenthesized: bool,
) -> Result<EuclideanParams, NotationError> {
    let accents = take_integer(chars, end, "accents")?;

    if !take_separator(chars, parenthesized) {
        return Err(NotationError::new(
            "Expected ',' between accents and steps",
            position(chars, end),
        ));
    }
    skip_whitespace(chars);
    let steps_start = position(chars, end);
    let steps = take_integer(chars, end, "steps")?;
    if steps > MAX_STEPS {
        return Err(NotationError::new(
            format!("Steps out of range (at most {})", MAX_STEPS),
            steps_start,
        ));
    }

    let rotation = if take_separator(chars, parenthesized) {
        take_integer(chars, end, "rotation")?
    } else {
        0
    };

    Ok(EuclideanParams {
        accents,
        steps,
        rotation,
    })
}

/// Consume a separator if one is present.
///
/// A comma always separates. Bare notation also accepts whitespace followed
/// by the start of another number.
fn take_separator(chars: &mut Chars, parenthesized: bool) -> bool {
    let skipped = skip_whitespace(chars);
    match peek_char(chars) {
        Some(',') => {
            chars.next();
            true
        }
        Some(c) if !parenthesized && skipped && (c.is_ascii_digit() || c == '-') => true,
        _ => false,
    }
}

/// Take an optionally negative integer
fn take_integer(chars: &mut Chars, end: usize, what: &str) -> Result<i64, NotationError> {
    skip_whitespace(chars);
    let start = position(chars, end);

    let mut digits = String::new();
    if peek_char(chars) == Some('-') {
        chars.next();
        digits.push('-');
    }
    while let Some(c) = peek_char(chars) {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }

    if digits.is_empty() || digits == "-" {
        return Err(NotationError::new(
            format!("Expected number for Euclidean {}", what),
            position(chars, end),
        ));
    }

    digits
        .parse::<i64>()
        .map_err(|_| NotationError::new(format!("Number out of range for {}", what), start))
}

/// Skip whitespace, returning whether any was skipped
fn skip_whitespace(chars: &mut Chars) -> bool {
    let mut skipped = false;
    while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {
        skipped = true;
    }
    skipped
}

fn peek_char(chars: &mut Chars) -> Option<char> {
    chars.peek().map(|&(_, c)| c)
}

fn position(chars: &mut Chars, end: usize) -> usize {
    chars.peek().map(|&(pos, _)| pos).unwrap_or(end)
}
