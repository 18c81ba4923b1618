use super::*;

fn plain() -> AnimationPlan {
    AnimationPlan::from_config(&PaginationConfig::default())
}

fn colored() -> AnimationPlan {
    AnimationPlan::from_config(&PaginationConfig {
        dot_color: Some(Rgba8::opaque(255, 255, 255)),
        inactive_dot_color: Some(Rgba8::opaque(0, 0, 0)),
        ..PaginationConfig::default()
    })
}

fn settle(dot: &mut DotAnimationController) {
    for _ in 0..2_000 {
        dot.tick(Duration::from_millis(16));
        if !dot.is_animating() {
            return;
        }
    }
    panic!("dot never settled");
}

#[test]
fn plan_selection_follows_color_pair() {
    assert_eq!(plain().driver(), AnimationDriver::Native);
    assert!(plain().colors().is_none());
    assert_eq!(colored().driver(), AnimationDriver::Software);
    assert!(colored().colors().is_some());

    let half = AnimationPlan::from_config(&PaginationConfig {
        dot_color: Some(Rgba8::opaque(255, 0, 0)),
        ..PaginationConfig::default()
    });
    assert!(matches!(half, AnimationPlan::OpacityScale { .. }));
}

#[test]
fn dot_mounting_active_animates_immediately() {
    let plan = plain();
    let dot = DotAnimationController::mount(0, true, &plan);
    assert!(dot.is_active());
    assert!(dot.is_animating());
    assert_eq!(dot.state().opacity.target(), Some(1.0));
    assert_eq!(dot.state().scale.target(), Some(1.0));
    assert_eq!(dot.driver(), Some(AnimationDriver::Native));
}

#[test]
fn dot_mounting_inactive_stays_idle() {
    let dot = DotAnimationController::mount(3, false, &plain());
    assert!(!dot.is_animating());
    assert_eq!(dot.index(), 3);
    assert_eq!(dot.state().opacity_progress(), 0.0);
}

#[test]
fn settled_active_dot_renders_full_opacity_and_scale() {
    let plan = plain();
    let mut dot = DotAnimationController::mount(0, true, &plan);
    settle(&mut dot);
    let spec = DotSpec::new(0, true, &PaginationConfig::default());
    let v = dot.visual(&spec, &plan);
    assert_eq!(v.opacity, 1.0);
    assert_eq!(v.scale, 1.0);
    assert!(v.color.is_none());
}

#[test]
fn inactive_dot_renders_inactive_look() {
    let plan = colored();
    let dot = DotAnimationController::mount(1, false, &plan);
    let spec = DotSpec::new(1, false, &PaginationConfig::default());
    let v = dot.visual(&spec, &plan);
    assert_eq!(v.opacity, 0.5);
    assert_eq!(v.scale, 0.5);
    assert_eq!(v.color, Some(Rgba8::opaque(0, 0, 0)));
}

#[test]
fn color_plan_animates_color_on_software_driver() {
    let plan = colored();
    let mut dot = DotAnimationController::mount(0, true, &plan);
    assert_eq!(dot.driver(), Some(AnimationDriver::Software));
    assert_eq!(dot.state().color.target(), Some(1.0));
    assert_eq!(dot.state().opacity.driver(), Some(AnimationDriver::Software));
    settle(&mut dot);
    assert_eq!(dot.state().color_progress(), 1.0);
}

#[test]
fn plain_plan_leaves_color_untouched() {
    let dot = DotAnimationController::mount(0, true, &plain());
    assert!(!dot.state().color.is_animating());
}

#[test]
fn rapid_toggle_always_targets_latest_value() {
    let plan = plain();
    let mut dot = DotAnimationController::mount(0, false, &plan);

    assert!(dot.on_active_changed(true, &plan));
    dot.tick(Duration::from_millis(50));
    let mid = dot.state().opacity_progress();
    assert!(mid > 0.0 && mid < 1.0);

    assert!(dot.on_active_changed(false, &plan));
    // Pre-empted from the current position, not snapped.
    assert_eq!(dot.state().opacity_progress(), mid);
    assert_eq!(dot.state().opacity.target(), Some(0.0));
    assert_eq!(dot.state().scale.target(), Some(0.0));

    settle(&mut dot);
    assert_eq!(dot.state().opacity_progress(), 0.0);
    assert_eq!(dot.state().scale_progress(), 0.0);
}

#[test]
fn repeated_flag_is_a_no_op() {
    let plan = plain();
    let mut dot = DotAnimationController::mount(0, true, &plan);
    assert!(!dot.on_active_changed(true, &plan));
}

#[test]
fn tick_reports_settling_once() {
    let plan = plain();
    let mut dot = DotAnimationController::mount(0, true, &plan);
    let mut settles = 0;
    for _ in 0..2_000 {
        if dot.tick(Duration::from_millis(16)) {
            settles += 1;
        }
    }
    assert_eq!(settles, 1);
    assert!(dot.driver().is_none());
}

#[test]
fn dot_spec_falls_back_to_default_press_opacity() {
    let spec = DotSpec::new(2, false, &PaginationConfig::default());
    assert_eq!(spec.active_opacity, DEFAULT_PRESS_OPACITY);
    let spec = DotSpec::new(
        2,
        false,
        &PaginationConfig {
            active_opacity: Some(0.7),
            ..PaginationConfig::default()
        },
    );
    assert_eq!(spec.active_opacity, 0.7);
}
