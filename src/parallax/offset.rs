use crate::{
    foundation::core::{Axis, Size, Vec2},
    foundation::math::interpolate,
    parallax::layout::LayoutBaseline,
};

/// Drift along the scroll axis for one scroll position.
///
/// `scroll_position` maps linearly from `[offset - slider_extent, offset +
/// slider_extent]` onto `[-padding, padding]` with `padding = axis_extent *
/// parallax_factor`, clamped at both ends.
pub fn compute_translation(
    scroll_position: f64,
    offset: f64,
    axis_extent: f64,
    slider_extent: f64,
    parallax_factor: f64,
) -> f64 {
    let padding = axis_extent * parallax_factor;
    interpolate(
        scroll_position,
        [offset - slider_extent, offset + slider_extent],
        [-padding, padding],
    )
}

/// Turns a measured baseline and the live scroll position into an image transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffsetComputer {
    pub axis: Axis,
    pub slider_extent: f64,
    pub parallax_factor: f64,
}

impl ParallaxOffsetComputer {
    pub fn new(axis: Axis, slider_extent: f64, parallax_factor: f64) -> Self {
        Self {
            axis,
            slider_extent,
            parallax_factor,
        }
    }

    /// Extra room on each side of the image along the scroll axis.
    pub fn padding(&self, baseline: &LayoutBaseline) -> f64 {
        baseline.extent(self.axis) * self.parallax_factor
    }

    /// Translation to apply; the cross axis is always zero.
    pub fn translation(&self, scroll_position: f64, baseline: &LayoutBaseline) -> Vec2 {
        self.axis.vector(compute_translation(
            scroll_position,
            baseline.offset,
            baseline.extent(self.axis),
            self.slider_extent,
            self.parallax_factor,
        ))
    }

    /// Rendered image box: enlarged by the padding on both sides of the
    /// scroll axis so a fully drifted image never shows an edge.
    pub fn image_size(&self, baseline: &LayoutBaseline) -> Size {
        let grow = self.padding(baseline) * 2.0;
        match self.axis {
            Axis::Horizontal => Size::new(baseline.width + grow, baseline.height),
            Axis::Vertical => Size::new(baseline.width, baseline.height + grow),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/offset.rs"]
mod tests;
