use crate::{
    animation::{ease::Ease, spring::SpringConfig, timing::TimingConfig},
    foundation::core::{Axis, Rgba8},
    foundation::error::{CarouselError, CarouselResult},
};

/// Fallback press opacity for tappable dots when none is configured.
pub const DEFAULT_PRESS_OPACITY: f64 = 0.2;

/// Dot row settings. Every field has a default, so `{}` is a valid JSON config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Opacity of a dot while pressed (tappable dots only).
    pub active_opacity: Option<f64>,
    pub inactive_dot_opacity: f64,
    pub inactive_dot_scale: f64,
    pub animated_duration_ms: u64,
    pub animated_friction: f64,
    pub animated_tension: f64,
    pub delay_press_in_ms: u64,
    pub dot_color: Option<Rgba8>,
    pub inactive_dot_color: Option<Rgba8>,
    /// Host element key used for the active dot instead of the default dot.
    pub dot_element: Option<String>,
    /// Host element key used for inactive dots instead of the default dot.
    pub inactive_dot_element: Option<String>,
    pub tappable_dots: bool,
    pub vertical: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            active_opacity: None,
            inactive_dot_opacity: 0.5,
            inactive_dot_scale: 0.5,
            animated_duration_ms: 250,
            animated_friction: 4.0,
            animated_tension: 50.0,
            delay_press_in_ms: 0,
            dot_color: None,
            inactive_dot_color: None,
            dot_element: None,
            inactive_dot_element: None,
            tappable_dots: false,
            vertical: false,
        }
    }
}

impl PaginationConfig {
    pub fn from_json(s: &str) -> CarouselResult<Self> {
        serde_json::from_str(s).map_err(|e| CarouselError::serde(e.to_string()))
    }

    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.vertical)
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig::new(self.animated_duration_ms, Ease::Linear)
    }

    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(self.animated_friction, self.animated_tension)
    }

    /// Both dot colors, or `None` when either is missing.
    pub fn color_pair(&self) -> Option<(Rgba8, Rgba8)> {
        self.dot_color.zip(self.inactive_dot_color)
    }

    /// Both element keys, or `None` when either is missing.
    pub fn element_pair(&self) -> Option<(&str, &str)> {
        self.dot_element
            .as_deref()
            .zip(self.inactive_dot_element.as_deref())
    }

    /// Human-readable descriptions of half-configured features.
    ///
    /// These degrade instead of failing; callers log them once.
    pub fn inconsistencies(&self, has_pager: bool) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.dot_color.is_some() != self.inactive_dot_color.is_some() {
            out.push("both `dot_color` and `inactive_dot_color` are required to animate color");
        }
        if self.dot_element.is_some() != self.inactive_dot_element.is_some() {
            out.push("both `dot_element` and `inactive_dot_element` are required for custom dots");
        }
        if self.tappable_dots && !has_pager {
            out.push("`tappable_dots` requires a pager handle; taps are disabled");
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pagination/config.rs"]
mod tests;
