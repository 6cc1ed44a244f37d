//! Toggle switch

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::property::PropertyId;
use kinetic_animation::spring::SpringConfig;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{controlled_edge, ControlledEdge};
use kinetic_core::motion_policy::{self, MotionPreference};
use kinetic_core::paint::Color;

const OFF: &str = "unchecked";
const ON: &str = "checked";

/// Switch whose knob springs between the two positions while the track
/// color cross-fades.
///
/// The on/off value is a controlled prop. Flipping it mid-travel
/// re-targets the knob spring with its velocity intact, so rapid
/// toggling reverses smoothly instead of teleporting.
pub struct Toggle {
    set: KeyframeSet,
    context: ElementAnimationContext,
    on: bool,
    preference: Arc<dyn MotionPreference>,
}

impl Toggle {
    pub const TRAVEL: f32 = 24.0;
    pub const COLOR_FADE: f32 = 0.2;

    pub fn off_color() -> Color {
        Color::from_hex(0xe5e7eb)
    }

    pub fn on_color() -> Color {
        Color::from_hex(0x3b82f6)
    }

    pub fn new() -> Self {
        let set = KeyframeSet::new()
            .state(OFF, Props::new().x(0.0).background(Self::off_color()))
            .state(ON, Props::new().x(Self::TRAVEL).background(Self::on_color()))
            .transition(TransitionSpec::tween(Self::COLOR_FADE))
            .property_transition(
                PropertyId::X,
                TransitionSpec::spring(SpringConfig::new(600.0, 30.0)),
            );
        let context = ElementAnimationContext::from_set(&set, OFF);
        Self {
            set,
            context,
            on: false,
            preference: motion_policy::shared(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Push the controlled value. No-op unless it changed.
    pub fn set_on(&mut self, on: bool) {
        let state = match controlled_edge(self.on, on) {
            Some(ControlledEdge::Set) => ON,
            Some(ControlledEdge::Unset) => OFF,
            None => return,
        };
        self.on = on;
        self.context.apply(&self.set, state);
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }

    /// Knob offset from the off position.
    pub fn knob_offset(&self) -> f32 {
        self.context.style().x
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    fn settle(toggle: &mut Toggle) {
        for _ in 0..600 {
            if toggle.update(1.0 / 60.0) {
                return;
            }
        }
        panic!("toggle failed to settle");
    }

    #[test]
    fn switches_knob_and_track_color() {
        let mut toggle = Toggle::new();
        toggle.set_on(true);
        settle(&mut toggle);
        assert_eq!(toggle.knob_offset(), 24.0);
        assert_eq!(toggle.style().background, Some(Toggle::on_color()));
    }

    #[test]
    fn rapid_flip_reverses_without_teleporting() {
        let mut toggle = Toggle::new();
        toggle.set_on(true);
        for _ in 0..3 {
            toggle.update(1.0 / 60.0);
        }
        let mid = toggle.knob_offset();
        assert!(mid > 0.0 && mid < 24.0);

        toggle.set_on(false);
        toggle.update(1.0 / 60.0);
        // The knob keeps moving from where it was; outbound velocity
        // carries it a little further before the reversal bites.
        assert!((toggle.knob_offset() - mid).abs() < 24.0 - mid);
        settle(&mut toggle);
        assert_eq!(toggle.knob_offset(), 0.0);
        assert_eq!(toggle.style().background, Some(Toggle::off_color()));
    }

    #[test]
    fn same_value_does_not_restart() {
        let mut toggle = Toggle::new();
        toggle.set_on(true);
        settle(&mut toggle);
        toggle.set_on(true);
        assert!(toggle.update(1.0 / 60.0));
    }

    #[test]
    fn reduced_motion_flips_instantly() {
        let mut toggle = Toggle::new();
        toggle.set_motion_preference(Arc::new(StaticPreference::new(true)));
        toggle.set_on(true);
        assert!(toggle.update(1.0 / 60.0));
        assert_eq!(toggle.knob_offset(), 24.0);
        assert_eq!(toggle.style().background, Some(Toggle::on_color()));
    }
}
