//! Drives patterns the way a downstream step sequencer would.

use euclid_core::types::time::{to_f64, Arc};
use euclid_core::{rhythm, EuclideanParams, NotationError, Pattern, PatternSummary};

#[test]
fn test_triggers_over_several_cycles() {
    let pattern = Pattern::euclidean(3, 8);
    let triggered: Vec<usize> = (0..24).filter(|&tick| pattern.is_onset(tick)).collect();
    assert_eq!(triggered, vec![0, 3, 6, 8, 11, 14, 16, 19, 22]);
}

#[test]
fn test_layered_patterns_line_up_on_the_cycle() {
    // A 3-step and a 4-step pattern both start each cycle on an onset
    let three = Pattern::euclidean(1, 3);
    let four = Pattern::euclidean(2, 4);
    let cycle = Arc::cycle();

    for t in three.onset_times().into_iter().chain(four.onset_times()) {
        assert!(cycle.contains(t));
    }
    assert_eq!(three.onset_times()[0], four.onset_times()[0]);
    assert!((to_f64(four.onset_times()[1]) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_plain_steps_match_pattern() {
    for (accents, steps) in [(13, 5), (-1, 5), (5, -1), (3, 8), (5, 8), (2, 5)] {
        assert_eq!(Pattern::euclidean(accents, steps).into_steps(), rhythm(accents, steps));
    }
}

#[test]
fn test_notation_roundtrip_through_display() -> anyhow::Result<()> {
    let params: EuclideanParams = "  ( 7 , 16 , 3 ) ".parse()?;
    let reparsed: EuclideanParams = params.to_string().parse()?;
    assert_eq!(params, reparsed);
    assert_eq!(reparsed.pattern(), Pattern::euclidean(7, 16).rotate_left(3));
    Ok(())
}

#[test]
fn test_notation_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(NotationError::new("bad", 3));
    assert_eq!(err.to_string(), "Error at 3: bad");

    let err = anyhow::Error::from(Pattern::parse("(1,").unwrap_err());
    assert!(err.to_string().contains("steps"));
}

#[test]
fn test_summary_from_pattern() {
    let summary = PatternSummary::from(&Pattern::euclidean(5, 8));
    assert_eq!(summary.accents, 5);
    assert_eq!(summary.text, "x.xx.xx.");
    assert!(summary.maximally_even);
}

#[cfg(feature = "serde")]
#[test]
fn test_summary_serializes() -> anyhow::Result<()> {
    let summary = PatternSummary::from(&Pattern::euclidean(2, 5));
    let json = serde_json::to_value(&summary)?;
    assert_eq!(json["onsets"], serde_json::json!([0, 2]));
    assert_eq!(json["text"], "x.x..");
    Ok(())
}
