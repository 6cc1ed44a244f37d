//! Staggered group choreography
//!
//! A stagger group turns one trigger firing into per-child delayed
//! firings. It owns no timing loop: [`StaggerGroup::fire`] converts the
//! ordering policy into scheduler entries and the scheduler's clock
//! does the rest.

use tracing::debug;

use crate::keyframe::StateName;
use crate::scheduler::{AnimationScheduler, ElementId};

/// Order in which children of a stagger group receive their delays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First child first.
    #[default]
    Forward,
    /// Last child first.
    Reverse,
    /// Middle child first, rippling outward.
    FromCenter,
}

/// Per-child delay policy for a list of elements.
///
/// Child `i`'s delay is `base_delay + effective_index(i) * increment`,
/// where the effective index depends on the direction. An optional
/// limit caps the effective index so long lists stop accumulating
/// delay past the first `n` steps.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    children: Vec<ElementId>,
    base_delay: f32,
    increment: f32,
    direction: StaggerDirection,
    limit: Option<usize>,
}

impl StaggerGroup {
    pub fn new(increment: f32) -> Self {
        Self {
            children: Vec::new(),
            base_delay: 0.0,
            increment: increment.max(0.0),
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Delay applied to every child before the per-index offset.
    pub fn base_delay(mut self, delay: f32) -> Self {
        self.base_delay = delay.max(0.0);
        self
    }

    pub fn direction(mut self, direction: StaggerDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Cap the effective index; children past the cap fire together.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn push(&mut self, child: ElementId) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Delay for child `index`, in seconds from the group trigger.
    pub fn delay_for_index(&self, index: usize) -> f32 {
        let count = self.children.len();
        if count == 0 {
            return self.base_delay;
        }
        let effective = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => count - 1 - index.min(count - 1),
            StaggerDirection::FromCenter => {
                let center = (count - 1) as f32 / 2.0;
                (index as f32 - center).abs().round() as usize
            }
        };
        let effective = match self.limit {
            Some(limit) => effective.min(limit),
            None => effective,
        };
        self.base_delay + effective as f32 * self.increment
    }

    /// Schedule `state` for every child at its staggered delay.
    pub fn fire(&self, scheduler: &mut AnimationScheduler, state: StateName) {
        debug!(children = self.children.len(), state, "stagger fire");
        for (index, &child) in self.children.iter().enumerate() {
            scheduler.schedule_in(child, state, self.delay_for_index(index));
        }
    }
}
