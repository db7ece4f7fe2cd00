//! Bjorklund algorithm for Euclidean rhythm generation.
//!
//! Follows Toussaint, "The Euclidean Algorithm Generates Traditional Musical
//! Rhythms" (2005): <http://cgm.cs.mcgill.ca/~godfried/publications/banff.pdf>

/// Generate a Euclidean rhythm using Bjorklund's algorithm.
///
/// Distributes `accents` onsets as evenly as possible across `total_steps`
/// slots. Returns a `Vec<bool>` where `true` = onset, `false` = rest.
///
/// Every input maps to a pattern:
/// - `total_steps <= 0` gives an empty pattern
/// - `accents <= 0` gives `total_steps` rests
/// - `accents > total_steps` gives `total_steps` onsets
///
/// ```
/// use euclid_core::rhythm;
///
/// // E(3,8), the Cuban tresillo
/// assert_eq!(
///     rhythm(3, 8),
///     vec![true, false, false, true, false, false, true, false]
/// );
/// ```
pub fn rhythm(accents: i64, total_steps: i64) -> Vec<bool> {
    if total_steps <= 0 {
        return vec![];
    }
    let steps = total_steps as usize;
    if accents <= 0 {
        return vec![false; steps];
    }
    if accents > total_steps {
        // Can't have more onsets than slots
        return vec![true; steps];
    }

    let accents = accents as usize;
    let pattern: Vec<Vec<bool>> = vec![vec![true]; accents];
    let remainder: Vec<Vec<bool>> = vec![vec![false]; steps - accents];

    let (pattern, remainder) = distribute(pattern, remainder);

    let mut result = Vec::with_capacity(steps);
    for group in pattern.into_iter().chain(remainder) {
        result.extend(group);
    }
    result
}

/// Repeatedly fold the remainder groups into the pattern groups until the
/// smaller list is down to a single group (or none).
///
/// The first pass always runs, even when both lists have one group each.
fn distribute(
    mut pattern: Vec<Vec<bool>>,
    mut remainder: Vec<Vec<bool>>,
) -> (Vec<Vec<bool>>, Vec<Vec<bool>>) {
    let mut threshold = 0;
    let mut min_len = pattern.len().min(remainder.len());

    while min_len > threshold {
        threshold = 1;
        (pattern, remainder) = merge_pass(pattern, remainder, min_len);
        min_len = pattern.len().min(remainder.len());
    }

    (pattern, remainder)
}

/// One merge pass: append `remainder[i]` onto `pattern[i]` for the first
/// `min_len` groups, then rebalance into fresh `(pattern, remainder)` lists.
fn merge_pass(
    pattern: Vec<Vec<bool>>,
    remainder: Vec<Vec<bool>>,
    min_len: usize,
) -> (Vec<Vec<bool>>, Vec<Vec<bool>>) {
    let pattern_was_shorter = pattern.len() == min_len;

    let mut pattern = pattern.into_iter();
    let mut remainder = remainder.into_iter();

    let merged: Vec<Vec<bool>> = pattern
        .by_ref()
        .take(min_len)
        .zip(remainder.by_ref())
        .map(|(mut group, tail)| {
            group.extend(tail);
            group
        })
        .collect();

    if pattern_was_shorter {
        // Remainder was the longer list, keep its unmerged tail
        (merged, remainder.collect())
    } else {
        // Leftover pattern groups become the new remainder
        (merged, pattern.collect())
    }
}
