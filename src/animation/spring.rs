use std::time::Duration;

/// Integration step; large ticks are split into steps of this size.
const STEP_SECS: f64 = 0.001;
const REST_DISPLACEMENT: f64 = 0.001;
const REST_SPEED: f64 = 0.001;

/// Spring settings expressed as friction/tension (Origami scale).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub friction: f64,
    pub tension: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            friction: 4.0,
            tension: 50.0,
        }
    }
}

impl SpringConfig {
    pub fn new(friction: f64, tension: f64) -> Self {
        Self { friction, tension }
    }

    /// Spring constant for a unit mass.
    pub fn stiffness(self) -> f64 {
        ((self.tension - 30.0) * 3.62 + 194.0).max(0.0)
    }

    /// Velocity damping coefficient for a unit mass.
    pub fn damping(self) -> f64 {
        ((self.friction - 8.0) * 3.0 + 25.0).max(0.0)
    }
}

/// Damped harmonic motion toward a target, integrated on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringAnimation {
    position: f64,
    velocity: f64,
    to: f64,
    stiffness: f64,
    damping: f64,
    finished: bool,
}

impl SpringAnimation {
    /// Start at `from` moving with `velocity` (units per second) toward `to`.
    pub fn new(from: f64, velocity: f64, to: f64, config: SpringConfig) -> Self {
        let stiffness = config.stiffness();
        let mut spring = Self {
            position: from,
            velocity,
            to,
            stiffness,
            damping: config.damping(),
            finished: false,
        };
        if stiffness == 0.0 || spring.is_at_rest() {
            spring.settle();
        }
        spring
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 && !self.finished {
            let h = remaining.min(STEP_SECS);
            let accel =
                -self.stiffness * (self.position - self.to) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;

            if self.is_at_rest() {
                self.settle();
            }
        }
        self.position
    }

    fn is_at_rest(&self) -> bool {
        (self.position - self.to).abs() <= REST_DISPLACEMENT && self.velocity.abs() <= REST_SPEED
    }

    fn settle(&mut self) {
        self.position = self.to;
        self.velocity = 0.0;
        self.finished = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
