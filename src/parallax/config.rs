use crate::{
    animation::{ease::Ease, timing::TimingConfig},
    foundation::core::{Axis, Rgba8},
    foundation::error::{CarouselError, CarouselResult},
};

/// Caller-supplied image size overriding the measured layout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Parallax image settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Fraction of the image extent used as drift on each side.
    pub parallax_factor: f64,
    pub fade_duration_ms: u64,
    pub show_spinner: bool,
    pub spinner_color: Rgba8,
    pub dimensions: Option<Dimensions>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            parallax_factor: 0.3,
            fade_duration_ms: 500,
            show_spinner: true,
            spinner_color: Rgba8::new(0, 0, 0, 102),
            dimensions: None,
        }
    }
}

impl ParallaxConfig {
    pub fn from_json(s: &str) -> CarouselResult<Self> {
        serde_json::from_str(s).map_err(|e| CarouselError::serde(e.to_string()))
    }

    /// Fade-in used once the image has loaded.
    pub fn fade(&self) -> TimingConfig {
        TimingConfig::new(self.fade_duration_ms, Ease::OutQuad)
    }
}

/// Geometry the pager shares with its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PagerMetrics {
    pub slider_width: f64,
    pub slider_height: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub vertical: bool,
}

impl PagerMetrics {
    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.vertical)
    }

    /// Pager viewport extent along the scroll axis.
    pub fn slider_extent(&self) -> f64 {
        match self.axis() {
            Axis::Horizontal => self.slider_width,
            Axis::Vertical => self.slider_height,
        }
    }

    /// Single item extent along the scroll axis.
    pub fn item_extent(&self) -> f64 {
        match self.axis() {
            Axis::Horizontal => self.item_width,
            Axis::Vertical => self.item_height,
        }
    }

    pub fn from_json(s: &str) -> CarouselResult<Self> {
        serde_json::from_str(s).map_err(|e| CarouselError::serde(e.to_string()))
    }
}
