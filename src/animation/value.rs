use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crate::{
    animation::{
        spring::{SpringAnimation, SpringConfig},
        timing::{TimingAnimation, TimingConfig},
    },
    foundation::math::{Extrapolate, Interpolation, Lerp},
};

static NEXT_ANIMATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one started animation; a pre-empted animation's id never finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    fn next() -> Self {
        Self(NEXT_ANIMATION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where per-frame interpolation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationDriver {
    /// Interpolated on the rendering side; cannot animate colors.
    #[default]
    Native,
    /// Computed in application logic and pushed every frame.
    Software,
}

/// How a value travels toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationConfig {
    Timing(TimingConfig),
    Spring(SpringConfig),
}

#[derive(Clone, Debug, PartialEq)]
enum Motion {
    Timing(TimingAnimation),
    Spring(SpringAnimation),
}

impl Motion {
    fn target(&self) -> f64 {
        match self {
            Self::Timing(t) => t.target(),
            Self::Spring(s) => s.target(),
        }
    }

    fn velocity(&self) -> f64 {
        match self {
            Self::Timing(_) => 0.0,
            Self::Spring(s) => s.velocity(),
        }
    }

    fn advance(&mut self, dt: Duration) -> f64 {
        match self {
            Self::Timing(t) => t.advance(dt),
            Self::Spring(s) => s.advance(dt),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Timing(t) => t.is_finished(),
            Self::Spring(s) => s.is_finished(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Running {
    id: AnimationId,
    driver: AnimationDriver,
    motion: Motion,
}

/// Result of advancing an [`AnimatedValue`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing in flight.
    Idle,
    /// Still moving.
    Running(AnimationId),
    /// Reached its target during this tick. Reported once.
    Finished(AnimationId),
}

/// A scalar that owns at most one in-flight animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    running: Option<Running>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            running: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Target of the in-flight animation, if any.
    pub fn target(&self) -> Option<f64> {
        self.running.as_ref().map(|r| r.motion.target())
    }

    pub fn driver(&self) -> Option<AnimationDriver> {
        self.running.as_ref().map(|r| r.driver)
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Start a new animation toward `to` from the current interpolated position.
    ///
    /// Any in-flight animation is dropped; spring motion inherits its velocity.
    pub fn animate_to(
        &mut self,
        to: f64,
        config: AnimationConfig,
        driver: AnimationDriver,
    ) -> AnimationId {
        let velocity = self
            .running
            .take()
            .map(|r| r.motion.velocity())
            .unwrap_or(0.0);
        let motion = match config {
            AnimationConfig::Timing(c) => Motion::Timing(TimingAnimation::new(self.value, to, c)),
            AnimationConfig::Spring(c) => {
                Motion::Spring(SpringAnimation::new(self.value, velocity, to, c))
            }
        };

        let id = AnimationId::next();
        self.running = Some(Running { id, driver, motion });
        id
    }

    /// Drop the in-flight animation, keeping the current value.
    pub fn stop(&mut self) {
        self.running = None;
    }

    /// Jump to `value`, cancelling any animation.
    pub fn set(&mut self, value: f64) {
        self.running = None;
        self.value = value;
    }

    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        let Some(running) = self.running.as_mut() else {
            return TickOutcome::Idle;
        };

        self.value = running.motion.advance(dt);
        let id = running.id;
        if running.motion.is_finished() {
            self.running = None;
            TickOutcome::Finished(id)
        } else {
            TickOutcome::Running(id)
        }
    }

    /// Map the current value through `[0, 1] -> output`.
    pub fn interpolate<T: Lerp + Clone>(&self, output: [T; 2], extrapolate: Extrapolate) -> T {
        Interpolation {
            input: [0.0, 1.0],
            output,
            extrapolate,
        }
        .sample(self.value)
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
