//! Magnetic-follow button

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::property::PropertyId;
use kinetic_animation::spring::SpringConfig;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{states, MagneticTracker, PointerInteraction};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};

/// Button pulled toward the pointer while hovered.
///
/// The offset target is a fraction of the pointer's distance from the
/// button center; a spring chases it so the element trails the cursor
/// instead of tracking it rigidly, and drifts home on leave. Pressing
/// compresses the button like [`ScaleButton`](crate::ScaleButton).
pub struct MagneticButton {
    set: KeyframeSet,
    context: ElementAnimationContext,
    tracker: MagneticTracker,
    pointer: PointerInteraction,
    follow: TransitionSpec,
    preference: Arc<dyn MotionPreference>,
    clicked: bool,
}

impl MagneticButton {
    pub const PRESS_SCALE: f32 = 0.95;

    pub fn new() -> Self {
        let set = KeyframeSet::new()
            .state(states::BASE, Props::new().scale(1.0))
            .state(states::HOVERED, Props::new().scale(1.0))
            .state(states::PRESSED, Props::new().scale(Self::PRESS_SCALE))
            .transition(TransitionSpec::spring(SpringConfig::snappy()));
        let mut context = ElementAnimationContext::from_set(&set, states::BASE);
        context.set_property(PropertyId::X, 0.0.into());
        context.set_property(PropertyId::Y, 0.0.into());
        Self {
            set,
            context,
            tracker: MagneticTracker::new(),
            pointer: PointerInteraction::new(),
            follow: TransitionSpec::spring(SpringConfig::snappy()),
            preference: motion_policy::shared(),
            clicked: false,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.tracker = self.tracker.with_strength(strength);
        self
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some((x, y)) = self.tracker.handle(event) {
            self.context
                .retarget_property(PropertyId::X, x.into(), self.follow);
            self.context
                .retarget_property(PropertyId::Y, y.into(), self.follow);
        }
        let was_pressed = self.pointer.is_pressed();
        if let Some(state) = self.pointer.handle(event) {
            self.context.apply(&self.set, state);
        }
        if was_pressed && matches!(event, InputEvent::PointerUp) {
            self.clicked = true;
        }
    }

    /// True once per click, then cleared.
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }
}

impl Default for MagneticButton {
    fn default() -> Self {
        Self::new()
    }
}
