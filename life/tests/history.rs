use life::patterns;
use life::{CycleDetector, LiveSet};

fn pattern(name: &str) -> LiveSet {
    patterns::find(name).map(|p| p.live_set()).unwrap_or_default()
}

/// Steps until the detector fires; returns the generation it fired on.
fn generations_until_cycle(start: LiveSet, detector: &mut CycleDetector, limit: usize) -> Option<usize> {
    start
        .generations()
        .take(limit)
        .position(|live| detector.observe(&live))
}

#[test]
fn still_life_repeats_immediately() {
    let mut detector = CycleDetector::default();
    let block = LiveSet::from([(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(generations_until_cycle(block, &mut detector, 20), Some(1));
}

#[test]
fn blinker_repeats_after_its_period() {
    let mut detector = CycleDetector::default();
    assert_eq!(generations_until_cycle(pattern("Blinker"), &mut detector, 20), Some(2));
}

#[test]
fn pulsar_repeats_after_three() {
    let mut detector = CycleDetector::default();
    assert_eq!(generations_until_cycle(pattern("Pulsar"), &mut detector, 20), Some(3));
}

#[test]
fn glider_never_repeats_a_fingerprint() {
    let mut detector = CycleDetector::default();
    assert_eq!(generations_until_cycle(pattern("Glider"), &mut detector, 200), None);
}

#[test]
fn window_too_short_for_period_misses_it() {
    let mut detector = CycleDetector::with_capacity(2);
    assert_eq!(generations_until_cycle(pattern("Pulsar"), &mut detector, 30), None);
}

#[test]
fn clear_forgets_history() {
    let mut detector = CycleDetector::default();
    let block = LiveSet::from([(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert!(!detector.observe(&block));
    detector.clear();
    assert!(!detector.observe(&block));
    assert!(detector.observe(&block));
}
