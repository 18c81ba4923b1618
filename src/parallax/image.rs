use std::time::Duration;

use crate::animation::{
    timing::TimingConfig,
    value::{AnimatedValue, AnimationConfig, AnimationDriver, TickOutcome},
};

/// Payload of a host image load/error notification, forwarded untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImageEvent {
    pub uri: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub message: Option<String>,
}

/// Caller hook for load and error notifications.
pub type ImageCallback = Box<dyn FnMut(&ImageEvent)>;

/// Where an image is in its load/fade lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    TransitionComplete,
    Error,
}

/// Load state of one image plus its fade-in.
///
/// `Error` is reachable from `Loading` and `Loaded` only. Once the fade-in has
/// completed, late or duplicate error events are dropped.
pub struct ImageLoadStateMachine {
    state: ImageState,
    mounted: bool,
    show_spinner: bool,
    fade_config: TimingConfig,
    fade: AnimatedValue,
    on_load: Option<ImageCallback>,
    on_error: Option<ImageCallback>,
}

impl ImageLoadStateMachine {
    pub fn new(fade_config: TimingConfig, show_spinner: bool) -> Self {
        Self {
            state: ImageState::Loading,
            mounted: true,
            show_spinner,
            fade_config,
            fade: AnimatedValue::new(0.0),
            on_load: None,
            on_error: None,
        }
    }

    pub fn set_on_load(&mut self, callback: Option<ImageCallback>) {
        self.on_load = callback;
    }

    pub fn set_on_error(&mut self, callback: Option<ImageCallback>) {
        self.on_error = callback;
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current fade-in opacity.
    pub fn opacity(&self) -> f64 {
        self.fade.value()
    }

    pub fn is_spinner_visible(&self) -> bool {
        self.show_spinner && self.state == ImageState::Loading
    }

    /// The host finished loading the image.
    ///
    /// Moves `Loading` to `Loaded` and starts the fade-in. In any other state
    /// the event is only forwarded; a failed image stays failed.
    pub fn on_load(&mut self, event: &ImageEvent) {
        if !self.mounted {
            return;
        }

        if self.state == ImageState::Loading {
            self.transition(ImageState::Loaded);
            self.fade.animate_to(
                1.0,
                AnimationConfig::Timing(self.fade_config),
                AnimationDriver::Native,
            );
        }

        if let Some(cb) = self.on_load.as_mut() {
            cb(event);
        }
    }

    /// The host failed to load the image.
    ///
    /// Ignored after the fade-in completed. A failure is surfaced once: repeat
    /// errors on an image already in `Error` do not reach the callback.
    pub fn on_error(&mut self, event: &ImageEvent) {
        if !self.mounted {
            return;
        }
        match self.state {
            ImageState::TransitionComplete => {
                tracing::debug!("ignoring image error after fade-in completed");
                return;
            }
            ImageState::Error => {
                tracing::debug!("ignoring repeated image error");
                return;
            }
            ImageState::Loading | ImageState::Loaded => {}
        }

        self.transition(ImageState::Error);
        if let Some(cb) = self.on_error.as_mut() {
            cb(event);
        }
    }

    /// Advance the fade-in. Completion only counts while mounted and still `Loaded`.
    pub fn tick(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        if let TickOutcome::Finished(_) = self.fade.tick(dt)
            && self.state == ImageState::Loaded
        {
            self.transition(ImageState::TransitionComplete);
        }
    }

    /// Tear down. Nothing mutates the state afterwards.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.fade.stop();
    }

    fn transition(&mut self, next: ImageState) {
        tracing::trace!(from = ?self.state, to = ?next, "image state");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/image.rs"]
mod tests;
