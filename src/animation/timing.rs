use std::time::Duration;

use crate::animation::ease::Ease;

/// Fixed-duration tween settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    pub duration_ms: u64,
    #[serde(default)]
    pub ease: Ease,
}

impl TimingConfig {
    pub fn new(duration_ms: u64, ease: Ease) -> Self {
        Self { duration_ms, ease }
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// A tween from `from` to `to` over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    ease: Ease,
    elapsed: Duration,
}

impl TimingAnimation {
    pub fn new(from: f64, to: f64, config: TimingConfig) -> Self {
        Self {
            from,
            to,
            duration: config.duration(),
            ease: config.ease,
            elapsed: Duration::ZERO,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f64 {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
