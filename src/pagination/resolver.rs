use crate::foundation::core::Axis;

/// What the host platform does with right-to-left layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Platform {
    /// The current locale lays out right-to-left.
    pub is_rtl: bool,
    /// The layout engine already reverses row order for RTL locales.
    pub mirrors_rtl_natively: bool,
}

impl Platform {
    pub fn ltr() -> Self {
        Self::default()
    }

    pub fn rtl(mirrors_rtl_natively: bool) -> Self {
        Self {
            is_rtl: true,
            mirrors_rtl_natively,
        }
    }
}

/// Per-render input to [`DotIndexResolver::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveIndexContext {
    pub raw_index: usize,
    pub total: usize,
    pub is_rtl_layout: bool,
    pub is_vertical_layout: bool,
}

/// Main-axis order in which the dot row lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    Row,
    RowReverse,
    Column,
}

impl FlowDirection {
    /// Visual slot (0 = main-axis start) of the dot at `index` in a row of `total`.
    pub fn slot(self, index: usize, total: usize) -> usize {
        match self {
            Self::Row | Self::Column => index,
            Self::RowReverse => total.saturating_sub(index + 1),
        }
    }
}

/// Maps the pager's active index into the dot row's own index space.
///
/// Horizontal rows on RTL platforms that do not mirror natively are rendered
/// reversed, so the active index has to be mirrored too. Platforms that mirror
/// on their own must not be mirrored twice, and vertical rows never are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotIndexResolver {
    platform: Platform,
}

impl DotIndexResolver {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Context for `raw_index` out of `total` on this resolver's platform.
    pub fn context(&self, raw_index: usize, total: usize, axis: Axis) -> ActiveIndexContext {
        ActiveIndexContext {
            raw_index,
            total,
            is_rtl_layout: self.platform.is_rtl,
            is_vertical_layout: axis.is_vertical(),
        }
    }

    pub fn needs_rtl_adaptation(&self, is_rtl_layout: bool, is_vertical_layout: bool) -> bool {
        is_rtl_layout && !self.platform.mirrors_rtl_natively && !is_vertical_layout
    }

    /// Effective index used for rendering and animation.
    ///
    /// Indices outside `0..total` pass through untouched, so they still match no dot.
    pub fn resolve(&self, ctx: ActiveIndexContext) -> usize {
        if ctx.raw_index >= ctx.total
            || !self.needs_rtl_adaptation(ctx.is_rtl_layout, ctx.is_vertical_layout)
        {
            return ctx.raw_index;
        }
        ctx.total - ctx.raw_index - 1
    }

    /// Pager index behind the dot displayed at `display_index`.
    ///
    /// Mirroring is an involution, so this is the same mapping as [`Self::resolve`].
    pub fn display_to_pager_index(&self, display_index: usize, total: usize, axis: Axis) -> usize {
        self.resolve(self.context(display_index, total, axis))
    }

    pub fn flow_direction(&self, axis: Axis) -> FlowDirection {
        match axis {
            Axis::Vertical => FlowDirection::Column,
            Axis::Horizontal if self.needs_rtl_adaptation(self.platform.is_rtl, false) => {
                FlowDirection::RowReverse
            }
            Axis::Horizontal => FlowDirection::Row,
        }
    }

    /// Rows of fewer than two dots are not rendered at all.
    pub fn is_suppressed(total: usize) -> bool {
        total < 2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pagination/resolver.rs"]
mod tests;
