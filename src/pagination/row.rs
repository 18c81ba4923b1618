use std::{collections::BTreeMap, rc::Rc, time::Duration};

use crate::{
    animation::value::AnimationDriver,
    foundation::core::{Axis, Rgba8},
    foundation::error::CarouselResult,
    pagination::{
        config::PaginationConfig,
        dot::{AnimationPlan, DotAnimationController, DotSpec},
        pager::PagerHandle,
        resolver::{DotIndexResolver, FlowDirection, Platform},
    },
};

/// One dot as the host should draw it this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DotFrame {
    /// Dot index in the row's own (possibly mirrored) index space.
    pub index: usize,
    /// Visual position along the main axis, `0` at the start edge.
    pub slot: usize,
    pub active: bool,
    pub opacity: f64,
    pub scale: f64,
    pub color: Option<Rgba8>,
    /// Host element to draw instead of the default dot.
    pub element: Option<String>,
    pub tappable: bool,
    pub press_opacity: f64,
    pub delay_press_in_ms: u64,
    pub driver: AnimationDriver,
}

/// The whole dot row for one frame, dots listed in visual order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PaginationFrame {
    pub direction: FlowDirection,
    pub active_dot_index: usize,
    pub dots: Vec<DotFrame>,
}

/// A row of position indicators following the pager's active page.
pub struct Pagination {
    config: PaginationConfig,
    resolver: DotIndexResolver,
    plan: AnimationPlan,
    pager: Option<Rc<dyn PagerHandle>>,
    dots: BTreeMap<usize, DotAnimationController>,
    active_index: usize,
    dots_length: usize,
}

impl Pagination {
    pub fn new(
        config: PaginationConfig,
        platform: Platform,
        pager: Option<Rc<dyn PagerHandle>>,
    ) -> Self {
        let plan = AnimationPlan::from_config(&config);
        let pagination = Self {
            config,
            resolver: DotIndexResolver::new(platform),
            plan,
            pager,
            dots: BTreeMap::new(),
            active_index: 0,
            dots_length: 0,
        };
        pagination.report_inconsistencies();
        pagination
    }

    /// Swap the configuration. Existing dots keep their progress; the next
    /// transition uses the new plan.
    pub fn reconfigure(&mut self, config: PaginationConfig) {
        self.plan = AnimationPlan::from_config(&config);
        self.config = config;
        self.report_inconsistencies();
        self.sync_dots();
    }

    fn report_inconsistencies(&self) {
        for problem in self.config.inconsistencies(self.pager.is_some()) {
            tracing::warn!("pagination: {problem}");
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }

    pub fn axis(&self) -> Axis {
        self.config.axis()
    }

    pub fn dots_length(&self) -> usize {
        self.dots_length
    }

    pub fn is_suppressed(&self) -> bool {
        DotIndexResolver::is_suppressed(self.dots_length)
    }

    pub fn is_tappable(&self) -> bool {
        self.config.tappable_dots && self.pager.is_some()
    }

    pub fn flow_direction(&self) -> FlowDirection {
        self.resolver.flow_direction(self.axis())
    }

    /// Active index after RTL adaptation.
    pub fn active_dot_index(&self) -> usize {
        self.resolver.resolve(
            self.resolver
                .context(self.active_index, self.dots_length, self.axis()),
        )
    }

    pub fn dot(&self, index: usize) -> Option<&DotAnimationController> {
        self.dots.get(&index)
    }

    pub fn is_animating(&self) -> bool {
        self.dots.values().any(DotAnimationController::is_animating)
    }

    /// Apply the pager's current state. New dots mount, dots past the count
    /// are disposed, and every dot whose active flag flipped starts animating.
    pub fn update(&mut self, active_index: usize, dots_length: usize) {
        self.active_index = active_index;
        self.dots_length = dots_length;
        self.sync_dots();
    }

    fn sync_dots(&mut self) {
        let removed = self.dots.split_off(&self.dots_length);
        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "disposed pagination dots");
        }

        let active = self.active_dot_index();
        for index in 0..self.dots_length {
            let is_active = index == active;
            match self.dots.get_mut(&index) {
                Some(dot) => {
                    dot.on_active_changed(is_active, &self.plan);
                }
                None => {
                    self.dots.insert(
                        index,
                        DotAnimationController::mount(index, is_active, &self.plan),
                    );
                }
            }
        }
    }

    /// Advance every dot. Returns how many dots settled on this tick.
    pub fn tick(&mut self, dt: Duration) -> usize {
        self.dots
            .values_mut()
            .map(|dot| dot.tick(dt))
            .filter(|settled| *settled)
            .count()
    }

    /// Build the row for drawing, or `None` when fewer than two dots exist.
    pub fn frame(&self) -> Option<PaginationFrame> {
        if self.is_suppressed() {
            return None;
        }

        let direction = self.flow_direction();
        let tappable = self.is_tappable();
        let elements = self.config.element_pair();
        let driver = self.plan.driver();

        let mut dots = self
            .dots
            .values()
            .map(|dot| {
                let spec = DotSpec::new(dot.index(), dot.is_active(), &self.config);
                let visual = dot.visual(&spec, &self.plan);
                DotFrame {
                    index: spec.index,
                    slot: direction.slot(spec.index, self.dots_length),
                    active: spec.is_active,
                    opacity: visual.opacity,
                    scale: visual.scale,
                    color: visual.color,
                    element: elements.map(|(active, inactive)| {
                        String::from(if spec.is_active { active } else { inactive })
                    }),
                    tappable,
                    press_opacity: if tappable { spec.active_opacity } else { 1.0 },
                    delay_press_in_ms: self.config.delay_press_in_ms,
                    driver,
                }
            })
            .collect::<Vec<_>>();
        dots.sort_by_key(|d| d.slot);

        Some(PaginationFrame {
            direction,
            active_dot_index: self.active_dot_index(),
            dots,
        })
    }

    /// Hand the resolved active index and dot count to a custom renderer.
    ///
    /// Suppressed rows never reach the renderer.
    pub fn render_with<R>(&self, render: impl FnOnce(usize, usize) -> R) -> Option<R> {
        if self.is_suppressed() {
            return None;
        }
        Some(render(self.active_dot_index(), self.dots_length))
    }

    /// Handle a tap on the dot at `display_index`.
    ///
    /// Returns the page the pager was asked to snap to. Failures to reach the
    /// pager are logged and swallowed so the dot stays usable.
    pub fn tap(&self, display_index: usize) -> Option<usize> {
        match self.try_tap(display_index) {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(
                    display_index,
                    error = %err,
                    "pagination: pager handle could not snap; it must be a live carousel handle"
                );
                None
            }
        }
    }

    /// Like [`tap`](Self::tap), but hands pager failures back to the caller.
    ///
    /// `Ok(None)` means the tap was not acted on: taps are disabled, no pager
    /// is attached, or `display_index` is past the last dot.
    pub fn try_tap(&self, display_index: usize) -> CarouselResult<Option<usize>> {
        if !self.config.tappable_dots || display_index >= self.dots_length {
            return Ok(None);
        }
        let Some(pager) = self.pager.as_ref() else {
            return Ok(None);
        };

        let position =
            self.resolver
                .display_to_pager_index(display_index, self.dots_length, self.axis());
        let page = pager.position_index(position)?;
        pager.snap_to_index(page)?;
        tracing::debug!(display_index, page, "dot tap snapped pager");
        Ok(Some(page))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pagination/row.rs"]
mod tests;
