//! Modal overlay

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::spring::SpringConfig;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{controlled_edge, ControlledEdge};
use kinetic_core::motion_policy::{self, MotionPreference};

const OPEN: &str = "open";
const CLOSED: &str = "closed";

/// Modal with a fading backdrop and a spring-scaled panel.
///
/// The backdrop and panel animate as separate layers: the backdrop is
/// a plain opacity tween while the panel springs up from slightly
/// shrunken, which reads as the panel arriving rather than the whole
/// screen cross-fading. Visibility is a controlled prop.
pub struct Modal {
    backdrop_set: KeyframeSet,
    panel_set: KeyframeSet,
    backdrop: ElementAnimationContext,
    panel: ElementAnimationContext,
    open: bool,
    preference: Arc<dyn MotionPreference>,
}

impl Modal {
    pub const BACKDROP_FADE: f32 = 0.2;
    pub const PANEL_START_SCALE: f32 = 0.9;

    pub fn new() -> Self {
        let backdrop_set = KeyframeSet::new()
            .state(CLOSED, Props::new().opacity(0.0))
            .state(OPEN, Props::new().opacity(1.0))
            .transition(TransitionSpec::tween(Self::BACKDROP_FADE));
        let panel_set = KeyframeSet::new()
            .state(
                CLOSED,
                Props::new().opacity(0.0).scale(Self::PANEL_START_SCALE),
            )
            .state(OPEN, Props::new().opacity(1.0).scale(1.0))
            .transition(TransitionSpec::spring(SpringConfig::new(300.0, 25.0)));
        let backdrop = ElementAnimationContext::from_set(&backdrop_set, CLOSED);
        let panel = ElementAnimationContext::from_set(&panel_set, CLOSED);
        Self {
            backdrop_set,
            panel_set,
            backdrop,
            panel,
            open: false,
            preference: motion_policy::shared(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Fully closed and settled; the host can drop the overlay.
    pub fn is_dismissed(&self) -> bool {
        !self.open && self.backdrop.is_settled() && self.panel.is_settled()
    }

    /// Push the controlled visibility. No-op unless it changed.
    pub fn set_open(&mut self, open: bool) {
        let state = match controlled_edge(self.open, open) {
            Some(ControlledEdge::Set) => OPEN,
            Some(ControlledEdge::Unset) => CLOSED,
            None => return,
        };
        self.open = open;
        self.backdrop.apply(&self.backdrop_set, state);
        self.panel.apply(&self.panel_set, state);
    }

    pub fn update(&mut self, dt: f32) -> bool {
        let reduced = self.preference.reduced();
        let backdrop_done = self.backdrop.step(dt, reduced);
        let panel_done = self.panel.step(dt, reduced);
        backdrop_done && panel_done
    }

    pub fn backdrop_style(&self) -> ResolvedStyle {
        self.backdrop.style()
    }

    pub fn panel_style(&self) -> ResolvedStyle {
        self.panel.style()
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}
