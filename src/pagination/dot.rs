use std::time::Duration;

use crate::{
    animation::{
        group::{ParallelAnimation, Track},
        spring::SpringConfig,
        timing::TimingConfig,
        value::{AnimatedValue, AnimationConfig, AnimationDriver},
    },
    foundation::core::Rgba8,
    foundation::math::Extrapolate,
    pagination::config::{DEFAULT_PRESS_OPACITY, PaginationConfig},
};

/// Active/inactive dot colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub active: Rgba8,
    pub inactive: Rgba8,
}

/// Which properties a dot animates, chosen once per configuration.
///
/// Color interpolation cannot run on the native driver, and mixing drivers on
/// one element tears, so the color plan moves the whole group to software.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationPlan {
    OpacityScale {
        timing: TimingConfig,
        spring: SpringConfig,
    },
    OpacityScaleColor {
        timing: TimingConfig,
        spring: SpringConfig,
        colors: ColorPair,
    },
}

impl AnimationPlan {
    pub fn from_config(config: &PaginationConfig) -> Self {
        let timing = config.timing();
        let spring = config.spring();
        match config.color_pair() {
            Some((active, inactive)) => Self::OpacityScaleColor {
                timing,
                spring,
                colors: ColorPair { active, inactive },
            },
            None => Self::OpacityScale { timing, spring },
        }
    }

    pub fn driver(&self) -> AnimationDriver {
        match self {
            Self::OpacityScale { .. } => AnimationDriver::Native,
            Self::OpacityScaleColor { .. } => AnimationDriver::Software,
        }
    }

    pub fn colors(&self) -> Option<ColorPair> {
        match self {
            Self::OpacityScale { .. } => None,
            Self::OpacityScaleColor { colors, .. } => Some(*colors),
        }
    }

    fn timing(&self) -> TimingConfig {
        match self {
            Self::OpacityScale { timing, .. } | Self::OpacityScaleColor { timing, .. } => *timing,
        }
    }

    fn spring(&self) -> SpringConfig {
        match self {
            Self::OpacityScale { spring, .. } | Self::OpacityScaleColor { spring, .. } => *spring,
        }
    }
}

/// Static description of one dot for the current render.
#[derive(Clone, Debug, PartialEq)]
pub struct DotSpec {
    pub index: usize,
    pub is_active: bool,
    /// Opacity while the dot is pressed.
    pub active_opacity: f64,
    pub inactive_opacity: f64,
    pub inactive_scale: f64,
    pub color: Option<Rgba8>,
    pub inactive_color: Option<Rgba8>,
}

impl DotSpec {
    pub fn new(index: usize, is_active: bool, config: &PaginationConfig) -> Self {
        Self {
            index,
            is_active,
            active_opacity: config.active_opacity.unwrap_or(DEFAULT_PRESS_OPACITY),
            inactive_opacity: config.inactive_dot_opacity,
            inactive_scale: config.inactive_dot_scale,
            color: config.dot_color,
            inactive_color: config.inactive_dot_color,
        }
    }
}

/// Animation progress of one dot; `0` is fully inactive, `1` fully active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotAnimationState {
    pub opacity: AnimatedValue,
    pub scale: AnimatedValue,
    pub color: AnimatedValue,
}

impl DotAnimationState {
    pub fn opacity_progress(&self) -> f64 {
        self.opacity.value()
    }

    pub fn scale_progress(&self) -> f64 {
        self.scale.value()
    }

    pub fn color_progress(&self) -> f64 {
        self.color.value()
    }
}

/// Interpolated look of a dot on the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotVisual {
    pub opacity: f64,
    pub scale: f64,
    pub color: Option<Rgba8>,
}

/// Drives one dot's opacity, scale and (optionally) color toward its active state.
#[derive(Clone, Debug, PartialEq)]
pub struct DotAnimationController {
    index: usize,
    active: bool,
    state: DotAnimationState,
    group: Option<ParallelAnimation>,
}

impl DotAnimationController {
    /// Create the controller for a freshly mounted dot.
    ///
    /// A dot that mounts active starts animating toward active right away.
    pub fn mount(index: usize, active: bool, plan: &AnimationPlan) -> Self {
        let mut dot = Self {
            index,
            active: false,
            state: DotAnimationState::default(),
            group: None,
        };
        if active {
            dot.on_active_changed(true, plan);
        }
        dot
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> &DotAnimationState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        self.group.as_ref().is_some_and(|g| !g.is_complete())
    }

    /// Driver of the in-flight group, if one is running.
    pub fn driver(&self) -> Option<AnimationDriver> {
        self.group
            .as_ref()
            .filter(|g| !g.is_complete())
            .map(ParallelAnimation::driver)
    }

    /// Progress value the current animation is heading for.
    pub fn target(&self) -> f64 {
        if self.active { 1.0 } else { 0.0 }
    }

    /// React to an active-flag change. Returns `false` when nothing changed.
    ///
    /// A running animation is pre-empted: the new one starts from the current
    /// interpolated position toward the new target.
    pub fn on_active_changed(&mut self, now_active: bool, plan: &AnimationPlan) -> bool {
        if now_active == self.active {
            return false;
        }
        self.active = now_active;
        let to = self.target();

        let timing = AnimationConfig::Timing(plan.timing());
        let spring = AnimationConfig::Spring(plan.spring());
        let DotAnimationState {
            opacity,
            scale,
            color,
        } = &mut self.state;

        let mut tracks = vec![
            Track::new(opacity, to, timing),
            Track::new(scale, to, spring),
        ];
        if plan.colors().is_some() {
            tracks.push(Track::new(color, to, timing));
        }

        self.group = Some(ParallelAnimation::start(tracks, plan.driver()));
        tracing::trace!(index = self.index, active = now_active, "dot animation started");
        true
    }

    /// Advance every member by `dt`. Returns `true` on the tick the group settles.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(group) = self.group.as_mut() else {
            return false;
        };
        let mut settled = false;
        for value in [
            &mut self.state.opacity,
            &mut self.state.scale,
            &mut self.state.color,
        ] {
            settled |= group.observe(value.tick(dt));
        }
        settled
    }

    pub fn visual(&self, spec: &DotSpec, plan: &AnimationPlan) -> DotVisual {
        DotVisual {
            opacity: self
                .state
                .opacity
                .interpolate([spec.inactive_opacity, 1.0], Extrapolate::Extend),
            scale: self
                .state
                .scale
                .interpolate([spec.inactive_scale, 1.0], Extrapolate::Extend),
            color: plan.colors().map(|c| {
                self.state
                    .color
                    .interpolate([c.inactive, c.active], Extrapolate::Extend)
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pagination/dot.rs"]
mod tests;
