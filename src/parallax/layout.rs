use crate::{
    foundation::core::{Axis, Rect, Vec2},
    foundation::error::CarouselResult,
    parallax::config::{Dimensions, PagerMetrics},
};

/// Host primitive that reports the image container's box relative to the pager.
pub trait MeasureLayout {
    fn measure_layout(&self) -> CarouselResult<Rect>;
}

/// Resting position and extent of the image container in the pager's scroll space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutBaseline {
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBaseline {
    /// Image extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Detached,
    Attached,
    Measured,
}

/// Measures the image container once the host has laid it out, and again on
/// every later layout change.
///
/// Measurement is two-phase: [`attach`](Self::attach) on mount, then
/// [`measure_after_first_layout`](Self::measure_after_first_layout) once the
/// host reports its first layout pass. Until then the baseline is all zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayoutTracker {
    metrics: PagerMetrics,
    dimensions: Option<Dimensions>,
    baseline: LayoutBaseline,
    phase: Phase,
}

impl ParallaxLayoutTracker {
    pub fn new(metrics: PagerMetrics, dimensions: Option<Dimensions>) -> Self {
        Self {
            metrics,
            dimensions,
            baseline: LayoutBaseline::default(),
            phase: Phase::Detached,
        }
    }

    pub fn metrics(&self) -> PagerMetrics {
        self.metrics
    }

    /// New pager geometry; applied on the next measurement.
    pub fn set_metrics(&mut self, metrics: PagerMetrics) {
        self.metrics = metrics;
    }

    pub fn baseline(&self) -> LayoutBaseline {
        self.baseline
    }

    pub fn is_attached(&self) -> bool {
        self.phase != Phase::Detached
    }

    pub fn is_measured(&self) -> bool {
        self.phase == Phase::Measured
    }

    pub fn attach(&mut self) {
        if self.phase == Phase::Detached {
            self.phase = Phase::Attached;
        }
    }

    /// Stop measuring. The last baseline is kept.
    pub fn detach(&mut self) {
        self.phase = Phase::Detached;
    }

    /// First measurement, run once the host's initial layout pass completed.
    pub fn measure_after_first_layout(
        &mut self,
        measurer: &dyn MeasureLayout,
    ) -> CarouselResult<Option<LayoutBaseline>> {
        self.on_layout(measurer)
    }

    /// Re-measure after a resize or reposition. Ignored while detached.
    #[tracing::instrument(level = "debug", skip(self, measurer))]
    pub fn on_layout(
        &mut self,
        measurer: &dyn MeasureLayout,
    ) -> CarouselResult<Option<LayoutBaseline>> {
        if self.phase == Phase::Detached {
            return Ok(None);
        }
        let rect = measurer.measure_layout()?;
        self.baseline = self.measure(rect);
        self.phase = Phase::Measured;
        tracing::debug!(
            offset = self.baseline.offset,
            width = self.baseline.width,
            height = self.baseline.height,
            "measured parallax baseline"
        );
        Ok(Some(self.baseline))
    }

    /// Baseline for a container box given relative to the pager.
    ///
    /// The offset is shifted by half the pager/item extent difference, so an
    /// item centered in the viewport has no drift. Measured sizes round up;
    /// explicit dimensions win over them.
    pub fn measure(&self, rect: Rect) -> LayoutBaseline {
        let axis = self.metrics.axis();
        let position = axis.along(Vec2::new(rect.x0, rect.y0));
        let offset = position - (self.metrics.slider_extent() - self.metrics.item_extent()) / 2.0;

        let explicit = self.dimensions.unwrap_or_default();
        LayoutBaseline {
            offset,
            width: explicit
                .width
                .filter(|w| *w != 0.0)
                .unwrap_or_else(|| rect.width().ceil()),
            height: explicit
                .height
                .filter(|h| *h != 0.0)
                .unwrap_or_else(|| rect.height().ceil()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/layout.rs"]
mod tests;
