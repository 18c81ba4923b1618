use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn linear_timing_reaches_target_at_duration() {
    let mut t = TimingAnimation::new(0.0, 1.0, TimingConfig::new(250, Ease::Linear));
    assert_eq!(t.value(), 0.0);
    assert!((t.advance(ms(125)) - 0.5).abs() < 1e-9);
    assert!(!t.is_finished());
    assert_eq!(t.advance(ms(125)), 1.0);
    assert!(t.is_finished());
}

#[test]
fn overshooting_tick_lands_exactly_on_target() {
    let mut t = TimingAnimation::new(1.0, 0.0, TimingConfig::new(100, Ease::OutQuad));
    assert_eq!(t.advance(ms(1_000)), 0.0);
    assert!(t.is_finished());
    assert_eq!(t.progress(), 1.0);
}

#[test]
fn zero_duration_finishes_immediately() {
    let t = TimingAnimation::new(3.0, 7.0, TimingConfig::new(0, Ease::Linear));
    assert!(t.is_finished());
    assert_eq!(t.value(), 7.0);
}

#[test]
fn ease_shapes_intermediate_values() {
    let mut t = TimingAnimation::new(0.0, 100.0, TimingConfig::new(500, Ease::OutQuad));
    let v = t.advance(ms(250));
    assert!((v - 75.0).abs() < 1e-9);
}
