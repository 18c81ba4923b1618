use crate::foundation::core::{Rgba8, Vec2};

/// Linear blend between two values of the same type.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` (`0` yields `a`, `1` yields `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// What happens to inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Pin to the nearest output bound.
    #[default]
    Clamp,
    /// Continue the linear mapping past the bounds.
    Extend,
}

/// Linear map from a scalar input range to an output range of any [`Lerp`] type.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation<T> {
    pub input: [f64; 2],
    pub output: [T; 2],
    pub extrapolate: Extrapolate,
}

impl<T: Lerp + Clone> Interpolation<T> {
    /// Clamped mapping over `input` -> `output`.
    pub fn clamped(input: [f64; 2], output: [T; 2]) -> Self {
        Self {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        }
    }

    /// Sample the mapping at `x`.
    ///
    /// A degenerate input range (both ends equal) maps every input to the first output.
    pub fn sample(&self, x: f64) -> T {
        let [in0, in1] = self.input;
        let span = in1 - in0;
        if span == 0.0 || !span.is_finite() {
            return self.output[0].clone();
        }

        let mut t = (x - in0) / span;
        if self.extrapolate == Extrapolate::Clamp {
            t = t.clamp(0.0, 1.0);
        }
        T::lerp(&self.output[0], &self.output[1], t)
    }
}

/// One-shot clamped interpolation of a scalar.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    Interpolation::clamped(input, output).sample(x)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
