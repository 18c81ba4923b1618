use std::time::Duration;

use super::*;
use crate::animation::{ease::Ease, spring::SpringConfig, timing::TimingConfig};

#[test]
fn group_completes_when_slowest_member_finishes() {
    let mut fast = AnimatedValue::default();
    let mut slow = AnimatedValue::default();
    let mut group = ParallelAnimation::start(
        [
            Track::new(
                &mut fast,
                1.0,
                AnimationConfig::Timing(TimingConfig::new(16, Ease::Linear)),
            ),
            Track::new(
                &mut slow,
                1.0,
                AnimationConfig::Timing(TimingConfig::new(48, Ease::Linear)),
            ),
        ],
        AnimationDriver::Native,
    );
    assert_eq!(group.len(), 2);
    assert_eq!(group.driver(), AnimationDriver::Native);

    let dt = Duration::from_millis(16);
    let mut completed_at = None;
    for frame in 0..5 {
        let a = group.observe(fast.tick(dt));
        let b = group.observe(slow.tick(dt));
        if a || b {
            completed_at = Some(frame);
        }
    }
    assert_eq!(completed_at, Some(2));
    assert!(group.is_complete());
}

#[test]
fn members_share_the_group_driver() {
    let mut a = AnimatedValue::default();
    let mut b = AnimatedValue::default();
    let _group = ParallelAnimation::start(
        [
            Track::new(
                &mut a,
                1.0,
                AnimationConfig::Timing(TimingConfig::new(100, Ease::Linear)),
            ),
            Track::new(
                &mut b,
                1.0,
                AnimationConfig::Spring(SpringConfig::default()),
            ),
        ],
        AnimationDriver::Software,
    );
    assert_eq!(a.driver(), Some(AnimationDriver::Software));
    assert_eq!(b.driver(), Some(AnimationDriver::Software));
}

#[test]
fn outcomes_from_foreign_animations_are_ignored() {
    let mut v = AnimatedValue::default();
    let mut group = ParallelAnimation::start(
        [Track::new(
            &mut v,
            1.0,
            AnimationConfig::Timing(TimingConfig::new(100, Ease::Linear)),
        )],
        AnimationDriver::Native,
    );

    let mut other = AnimatedValue::default();
    other.animate_to(
        1.0,
        AnimationConfig::Timing(TimingConfig::new(0, Ease::Linear)),
        AnimationDriver::Native,
    );
    assert!(!group.observe(other.tick(Duration::from_millis(1))));
    assert!(!group.is_complete());
}
