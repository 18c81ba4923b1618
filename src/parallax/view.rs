use std::time::Duration;

use crate::{
    foundation::core::{Rgba8, Vec2},
    foundation::error::CarouselResult,
    parallax::{
        config::{PagerMetrics, ParallaxConfig},
        image::{ImageCallback, ImageEvent, ImageLoadStateMachine, ImageState},
        layout::{LayoutBaseline, MeasureLayout, ParallaxLayoutTracker},
        offset::ParallaxOffsetComputer,
        scroll::ScrollReader,
    },
};

/// Host-side image element that accepts raw property updates.
pub trait ViewHandle {
    fn set_native_props(&mut self, props: &serde_json::Value);
}

/// What the host draws for one parallax image this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxImageFrame {
    pub translate: Vec2,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    /// Spinner color while the spinner is visible.
    pub spinner: Option<Rgba8>,
    pub state: ImageState,
}

/// A pager item's background image drifting against the scroll direction.
pub struct ParallaxImage {
    config: ParallaxConfig,
    tracker: ParallaxLayoutTracker,
    computer: ParallaxOffsetComputer,
    image: ImageLoadStateMachine,
    scroll: Option<ScrollReader>,
    view: Option<Box<dyn ViewHandle>>,
}

impl ParallaxImage {
    pub fn new(config: ParallaxConfig, metrics: PagerMetrics, scroll: Option<ScrollReader>) -> Self {
        let tracker = ParallaxLayoutTracker::new(metrics, config.dimensions);
        let computer = ParallaxOffsetComputer::new(
            metrics.axis(),
            metrics.slider_extent(),
            config.parallax_factor,
        );
        let image = ImageLoadStateMachine::new(config.fade(), config.show_spinner);
        Self {
            config,
            tracker,
            computer,
            image,
            scroll,
            view: None,
        }
    }

    pub fn with_view(mut self, view: Box<dyn ViewHandle>) -> Self {
        self.view = Some(view);
        self
    }

    pub fn set_on_load(&mut self, callback: Option<ImageCallback>) {
        self.image.set_on_load(callback);
    }

    pub fn set_on_error(&mut self, callback: Option<ImageCallback>) {
        self.image.set_on_error(callback);
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn state(&self) -> ImageState {
        self.image.state()
    }

    pub fn baseline(&self) -> LayoutBaseline {
        self.tracker.baseline()
    }

    /// Mount. Measuring waits for [`on_first_layout`](Self::on_first_layout).
    pub fn attach(&mut self) {
        self.tracker.attach();
    }

    pub fn on_first_layout(
        &mut self,
        measurer: &dyn MeasureLayout,
    ) -> CarouselResult<Option<LayoutBaseline>> {
        let measured = self.tracker.measure_after_first_layout(measurer)?;
        self.sync_computer(measured);
        Ok(measured)
    }

    pub fn on_layout(
        &mut self,
        measurer: &dyn MeasureLayout,
    ) -> CarouselResult<Option<LayoutBaseline>> {
        let measured = self.tracker.on_layout(measurer)?;
        self.sync_computer(measured);
        Ok(measured)
    }

    /// The pager changed size or orientation. Takes effect on the next layout;
    /// until then the image keeps drifting against the previous baseline.
    pub fn set_metrics(&mut self, metrics: PagerMetrics) {
        self.tracker.set_metrics(metrics);
    }

    // The computer must always describe the geometry the baseline was measured with.
    fn sync_computer(&mut self, measured: Option<LayoutBaseline>) {
        if measured.is_none() {
            return;
        }
        let metrics = self.tracker.metrics();
        self.computer = ParallaxOffsetComputer::new(
            metrics.axis(),
            metrics.slider_extent(),
            self.config.parallax_factor,
        );
    }

    pub fn on_load(&mut self, event: &ImageEvent) {
        self.image.on_load(event);
    }

    pub fn on_error(&mut self, event: &ImageEvent) {
        self.image.on_error(event);
    }

    pub fn tick(&mut self, dt: Duration) {
        self.image.tick(dt);
    }

    pub fn unmount(&mut self) {
        self.image.unmount();
        self.tracker.detach();
    }

    /// Current drift. Zero without a scroll position to follow.
    pub fn translation(&self) -> Vec2 {
        match &self.scroll {
            Some(scroll) => self.computer.translation(scroll.get(), &self.tracker.baseline()),
            None => Vec2::ZERO,
        }
    }

    pub fn frame(&self) -> ParallaxImageFrame {
        let baseline = self.tracker.baseline();
        let size = self.computer.image_size(&baseline);
        ParallaxImageFrame {
            translate: self.translation(),
            width: size.width,
            height: size.height,
            opacity: self.image.opacity(),
            spinner: self
                .image
                .is_spinner_visible()
                .then_some(self.config.spinner_color),
            state: self.image.state(),
        }
    }

    /// Forward raw props to the host element. Returns `false` when no element is attached.
    pub fn set_native_props(&mut self, props: &serde_json::Value) -> bool {
        match self.view.as_mut() {
            Some(view) => {
                view.set_native_props(props);
                true
            }
            None => {
                tracing::debug!("set_native_props without a host view");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/view.rs"]
mod tests;
