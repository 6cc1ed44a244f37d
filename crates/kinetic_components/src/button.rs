//! Scale-feedback button

use std::sync::Arc;

use tracing::trace;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::spring::SpringConfig;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{states, PointerInteraction};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};

/// Button that grows on hover and compresses while pressed.
///
/// Releasing over the button registers a click; releasing after the
/// pointer left does not. The caller polls [`take_clicked`] once per
/// frame, mirroring immediate-mode input handling.
///
/// [`take_clicked`]: Self::take_clicked
pub struct ScaleButton {
    set: KeyframeSet,
    context: ElementAnimationContext,
    pointer: PointerInteraction,
    preference: Arc<dyn MotionPreference>,
    clicked: bool,
}

impl ScaleButton {
    pub const HOVER_SCALE: f32 = 1.05;
    pub const PRESS_SCALE: f32 = 0.95;

    pub fn new() -> Self {
        Self::with_spring(SpringConfig::stiff())
    }

    pub fn with_spring(spring: SpringConfig) -> Self {
        let set = KeyframeSet::new()
            .state(states::BASE, Props::new().scale(1.0))
            .state(states::HOVERED, Props::new().scale(Self::HOVER_SCALE))
            .state(states::FOCUSED, Props::new().scale(Self::HOVER_SCALE))
            .state(states::PRESSED, Props::new().scale(Self::PRESS_SCALE))
            .transition(TransitionSpec::spring(spring));
        let context = ElementAnimationContext::from_set(&set, states::BASE);
        Self {
            set,
            context,
            pointer: PointerInteraction::new(),
            preference: motion_policy::shared(),
            clicked: false,
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let was_pressed = self.pointer.is_pressed();
        if let Some(state) = self.pointer.handle(event) {
            self.context.apply(&self.set, state);
        }
        // A release that still counts as hovered is a click; a release
        // after PointerLeave already cleared the press is not.
        if was_pressed && matches!(event, InputEvent::PointerUp) {
            trace!("click");
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

impl Default for ScaleButton {
    fn default() -> Self {
        Self::new()
    }
}
