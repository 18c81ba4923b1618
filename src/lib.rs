//! carousel-fx computes the moving parts of a paged carousel.
//!
//! Two components sit on top of a host pager:
//!
//! - [`Pagination`]: a row of position dots that follows the pager's active index,
//!   mirrors for RTL layouts where the platform does not, and animates each dot's
//!   opacity, scale and optional color on every change.
//! - [`ParallaxImage`]: a background image that drifts against the scroll direction,
//!   derived from a measured [`LayoutBaseline`] and the live [`ScrollPosition`], and
//!   fades in once it has loaded.
//!
//! Both are frame-driven: the host calls `tick(dt)` from its render loop and reads a
//! serializable frame back.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod pagination;
mod parallax;

pub use crate::foundation::core::{Axis, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{CarouselError, CarouselResult, NavigationError};
pub use crate::foundation::math::{Extrapolate, Interpolation, Lerp, interpolate};

pub use crate::animation::ease::Ease;
pub use crate::animation::group::{ParallelAnimation, Track};
pub use crate::animation::spring::{SpringAnimation, SpringConfig};
pub use crate::animation::timing::{TimingAnimation, TimingConfig};
pub use crate::animation::value::{
    AnimatedValue, AnimationConfig, AnimationDriver, AnimationId, TickOutcome,
};

pub use crate::pagination::config::{DEFAULT_PRESS_OPACITY, PaginationConfig};
pub use crate::pagination::dot::{
    AnimationPlan, ColorPair, DotAnimationController, DotAnimationState, DotSpec, DotVisual,
};
pub use crate::pagination::pager::PagerHandle;
pub use crate::pagination::resolver::{
    ActiveIndexContext, DotIndexResolver, FlowDirection, Platform,
};
pub use crate::pagination::row::{DotFrame, Pagination, PaginationFrame};

pub use crate::parallax::config::{Dimensions, PagerMetrics, ParallaxConfig};
pub use crate::parallax::image::{ImageCallback, ImageEvent, ImageLoadStateMachine, ImageState};
pub use crate::parallax::layout::{LayoutBaseline, MeasureLayout, ParallaxLayoutTracker};
pub use crate::parallax::offset::{ParallaxOffsetComputer, compute_translation};
pub use crate::parallax::scroll::{ScrollPosition, ScrollReader};
pub use crate::parallax::view::{ParallaxImage, ParallaxImageFrame, ViewHandle};
