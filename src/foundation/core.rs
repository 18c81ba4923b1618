use std::{fmt, str::FromStr};

use crate::foundation::error::{CarouselError, CarouselResult};

pub use kurbo::{Rect, Size, Vec2};

/// Scroll axis of a pager, dot row or parallax image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pages scroll left/right.
    #[default]
    Horizontal,
    /// Pages scroll up/down.
    Vertical,
}

impl Axis {
    /// Pick the axis from a `vertical` flag.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// `true` for [`Axis::Vertical`].
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Component of `v` along this axis.
    pub fn along(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// A vector carrying `value` on this axis and zero on the other one.
    pub fn vector(self, value: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(value, 0.0),
            Self::Vertical => Vec2::new(0.0, value),
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Parses the CSS-ish notations hosts tend to hand over: `#rgb`, `#rrggbb`,
/// `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }

    fn parse_hex(hex: &str) -> CarouselResult<Self> {
        let digit = |i: usize| -> CarouselResult<u8> {
            hex.get(i..i + 1)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| CarouselError::validation(format!("invalid hex color '#{hex}'")))
        };
        let byte = |i: usize| -> CarouselResult<u8> { Ok(digit(i)? * 16 + digit(i + 1)?) };

        match hex.len() {
            3 => Ok(Self::opaque(
                digit(0)? * 17,
                digit(1)? * 17,
                digit(2)? * 17,
            )),
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(CarouselError::validation(format!(
                "hex color '#{hex}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    fn parse_functional(args: &str, with_alpha: bool) -> CarouselResult<Self> {
        let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(CarouselError::validation(format!(
                "color function expects {expected} components, got {}",
                parts.len()
            )));
        }

        let channel = |s: &str| -> CarouselResult<u8> {
            let v: f64 = s
                .parse()
                .map_err(|_| CarouselError::validation(format!("invalid color channel '{s}'")))?;
            if !v.is_finite() {
                return Err(CarouselError::validation("color channel must be finite"));
            }
            Ok(v.round().clamp(0.0, 255.0) as u8)
        };

        let a = if with_alpha {
            let v: f64 = parts[3].parse().map_err(|_| {
                CarouselError::validation(format!("invalid alpha '{}'", parts[3]))
            })?;
            if !v.is_finite() {
                return Err(CarouselError::validation("alpha must be finite"));
            }
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            255
        };

        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }
}

impl FromStr for Rgba8 {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            return Self::parse_functional(args, true);
        }
        if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            return Self::parse_functional(args, false);
        }
        Err(CarouselError::validation(format!("unsupported color '{s}'")))
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = CarouselError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
