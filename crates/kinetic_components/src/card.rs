//! Hover-lift card

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::spring::SpringConfig;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{states, PointerInteraction};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};
use kinetic_core::paint::{Color, Shadow};

/// Card that lifts toward the viewer on hover.
///
/// The lift is a vertical offset plus a deepening drop shadow, both
/// spring-driven so a pointer sweeping across the card reverses the
/// motion mid-flight without a snap. Keyboard focus lifts the card the
/// same way.
pub struct HoverCard {
    set: KeyframeSet,
    context: ElementAnimationContext,
    pointer: PointerInteraction,
    preference: Arc<dyn MotionPreference>,
}

impl HoverCard {
    pub const LIFT: f32 = -8.0;

    pub fn resting_shadow() -> Shadow {
        Shadow::new(0.0, 2.0, 8.0, Color::rgba(0.0, 0.0, 0.0, 0.08))
    }

    pub fn lifted_shadow() -> Shadow {
        Shadow::new(0.0, 20.0, 40.0, Color::rgba(0.0, 0.0, 0.0, 0.12))
    }

    pub fn new() -> Self {
        Self::with_spring(SpringConfig::snappy())
    }

    pub fn with_spring(spring: SpringConfig) -> Self {
        let lifted = Props::new().y(Self::LIFT).shadow(Self::lifted_shadow());
        let set = KeyframeSet::new()
            .state(
                states::BASE,
                Props::new().y(0.0).shadow(Self::resting_shadow()),
            )
            .state(states::HOVERED, lifted.clone())
            .state(states::FOCUSED, lifted)
            .transition(TransitionSpec::spring(spring));
        let context = ElementAnimationContext::from_set(&set, states::BASE);
        Self {
            set,
            context,
            pointer: PointerInteraction::new(),
            preference: motion_policy::shared(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(state) = self.pointer.handle(event) {
            // Cards have no pressed styling; a press holds the lift.
            let state = if state == states::PRESSED {
                states::HOVERED
            } else {
                state
            };
            self.context.apply(&self.set, state);
        }
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }
}

impl Default for HoverCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    fn settle(card: &mut HoverCard) {
        for _ in 0..600 {
            if card.update(1.0 / 60.0) {
                return;
            }
        }
        panic!("card failed to settle");
    }

    #[test]
    fn hover_lifts_and_deepens_shadow() {
        let mut card = HoverCard::new();
        card.handle_event(&InputEvent::PointerEnter { bounds: None });
        settle(&mut card);
        let style = card.style();
        assert_eq!(style.y, -8.0);
        let shadow = style.shadow.unwrap();
        assert_eq!(shadow.offset_y, 20.0);
        assert_eq!(shadow.blur, 40.0);
    }

    #[test]
    fn leave_mid_flight_reverses_without_snap() {
        let mut card = HoverCard::new();
        card.handle_event(&InputEvent::PointerEnter { bounds: None });
        for _ in 0..3 {
            card.update(1.0 / 60.0);
        }
        let mid = card.style().y;
        assert!(mid < 0.0 && mid > -8.0);
        card.handle_event(&InputEvent::PointerLeave);
        card.update(1.0 / 60.0);
        // One frame later the card is still near where it was.
        assert!((card.style().y - mid).abs() < 2.0);
        settle(&mut card);
        assert_eq!(card.style().y, 0.0);
    }

    #[test]
    fn focus_lifts_like_hover() {
        let mut card = HoverCard::new();
        card.handle_event(&InputEvent::Focus);
        settle(&mut card);
        assert_eq!(card.style().y, -8.0);
    }

    #[test]
    fn reduced_motion_lands_in_one_frame() {
        let mut card = HoverCard::new();
        card.set_motion_preference(Arc::new(StaticPreference::new(true)));
        card.handle_event(&InputEvent::PointerEnter { bounds: None });
        assert!(card.update(1.0 / 60.0));
        assert_eq!(card.style().y, -8.0);
    }
}
