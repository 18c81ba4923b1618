use crate::animation::value::{
    AnimatedValue, AnimationConfig, AnimationDriver, AnimationId, TickOutcome,
};

/// One member of a [`ParallelAnimation`]: a value, its target and how it gets there.
pub struct Track<'a> {
    pub value: &'a mut AnimatedValue,
    pub to: f64,
    pub config: AnimationConfig,
}

impl<'a> Track<'a> {
    pub fn new(value: &'a mut AnimatedValue, to: f64, config: AnimationConfig) -> Self {
        Self { value, to, config }
    }
}

/// Members started together on one driver; complete once every member has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelAnimation {
    driver: AnimationDriver,
    pending: Vec<AnimationId>,
}

impl ParallelAnimation {
    /// Start every track at once. All members share `driver`.
    pub fn start<'a>(
        tracks: impl IntoIterator<Item = Track<'a>>,
        driver: AnimationDriver,
    ) -> Self {
        let pending = tracks
            .into_iter()
            .map(|t| t.value.animate_to(t.to, t.config, driver))
            .collect();
        Self { driver, pending }
    }

    pub fn driver(&self) -> AnimationDriver {
        self.driver
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one member's tick outcome. Returns `true` on the tick the group completes.
    pub fn observe(&mut self, outcome: TickOutcome) -> bool {
        let TickOutcome::Finished(id) = outcome else {
            return false;
        };
        let before = self.pending.len();
        self.pending.retain(|p| *p != id);
        before != self.pending.len() && self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;
