//! Scroll-linked reveal

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::KeyframeSet;
use kinetic_animation::presets::{self, SlideDirection};
use kinetic_animation::trigger::{states, ViewportTrigger};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};

/// Element that slides into place when scrolled into view.
///
/// By default it fires once: scrolling back out does not hide it
/// again. [`repeating`](Self::repeating) opts into toggling.
pub struct ScrollReveal {
    set: KeyframeSet,
    context: ElementAnimationContext,
    viewport: ViewportTrigger,
    preference: Arc<dyn MotionPreference>,
}

impl ScrollReveal {
    pub const DURATION: f32 = 0.6;
    pub const DISTANCE: f32 = 50.0;
    pub const THRESHOLD: f32 = 0.3;

    pub fn new() -> Self {
        Self::with_direction(SlideDirection::Up)
    }

    pub fn with_direction(direction: SlideDirection) -> Self {
        let set = presets::slide_reveal(direction, Self::DISTANCE, Self::DURATION, 0.0);
        let context = ElementAnimationContext::from_set(&set, states::HIDDEN);
        Self {
            set,
            context,
            viewport: ViewportTrigger::new().threshold(Self::THRESHOLD).once(),
            preference: motion_policy::shared(),
        }
    }

    /// Replay the reveal on every viewport entry and hide on exit.
    pub fn repeating(mut self) -> Self {
        self.viewport = self.viewport.repeating();
        self
    }

    /// Custom visibility threshold, clamped to `[0, 1]`.
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.viewport = self.viewport.threshold(threshold);
        self
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::ViewportUpdate { fraction } = event {
            if let Some(state) = self.viewport.observe(*fraction) {
                self.context.apply(&self.set, state);
            }
        }
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}
