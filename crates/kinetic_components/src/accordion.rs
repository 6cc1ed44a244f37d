//! Accordion section

use std::sync::Arc;

use tracing::debug;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::easing::Easing;
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::property::PropertyId;
use kinetic_animation::transition::TransitionSpec;
use kinetic_animation::trigger::{controlled_edge, ControlledEdge};
use kinetic_core::motion_policy::{self, MotionPreference};

const OPEN: &str = "open";
const CLOSED: &str = "closed";

/// Collapsible section with animated height and a rotating chevron.
///
/// Open/closed is a controlled prop: the caller owns the boolean and
/// pushes it in via [`set_open`](Self::set_open). Content opacity is
/// sequenced against the height: opening fades the content in after
/// the panel has started growing, closing fades it out immediately so
/// text never floats in a half-collapsed panel.
pub struct Accordion {
    opening: KeyframeSet,
    closing: KeyframeSet,
    chevron_set: KeyframeSet,
    content: ElementAnimationContext,
    chevron: ElementAnimationContext,
    open: bool,
    content_height: f32,
    preference: Arc<dyn MotionPreference>,
}

impl Accordion {
    pub const HEIGHT_DURATION: f32 = 0.3;
    pub const FADE_DURATION: f32 = 0.2;
    pub const FADE_IN_DELAY: f32 = 0.1;
    pub const CHEVRON_TURN: f32 = 180.0;

    pub fn new(content_height: f32) -> Self {
        let (opening, closing) = Self::panel_sets(content_height);
        let chevron_set = KeyframeSet::new()
            .state(CLOSED, Props::new().rotate(0.0))
            .state(OPEN, Props::new().rotate(Self::CHEVRON_TURN))
            .transition(
                TransitionSpec::tween(Self::HEIGHT_DURATION).with_easing(Easing::ENTRANCE),
            );
        let content = ElementAnimationContext::from_set(&closing, CLOSED);
        let chevron = ElementAnimationContext::from_set(&chevron_set, CLOSED);
        Self {
            opening,
            closing,
            chevron_set,
            content,
            chevron,
            open: false,
            content_height,
            preference: motion_policy::shared(),
        }
    }

    /// The two directions share targets but sequence opacity
    /// differently, so each direction carries its own set.
    fn panel_sets(content_height: f32) -> (KeyframeSet, KeyframeSet) {
        let states = |set: KeyframeSet| {
            set.state(CLOSED, Props::new().height(0.0).opacity(0.0))
                .state(OPEN, Props::new().height(content_height).opacity(1.0))
                .transition(
                    TransitionSpec::tween(Self::HEIGHT_DURATION).with_easing(Easing::ENTRANCE),
                )
        };
        let opening = states(KeyframeSet::new()).property_transition(
            PropertyId::Opacity,
            TransitionSpec::tween(Self::FADE_DURATION).with_delay(Self::FADE_IN_DELAY),
        );
        let closing = states(KeyframeSet::new())
            .property_transition(PropertyId::Opacity, TransitionSpec::tween(Self::FADE_DURATION));
        (opening, closing)
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Push the controlled open state. No-op unless it changed.
    pub fn set_open(&mut self, open: bool) {
        match controlled_edge(self.open, open) {
            Some(ControlledEdge::Set) => {
                debug!(height = self.content_height, "accordion open");
                self.open = true;
                self.content.apply(&self.opening, OPEN);
                self.chevron.apply(&self.chevron_set, OPEN);
            }
            Some(ControlledEdge::Unset) => {
                self.open = false;
                self.content.apply(&self.closing, CLOSED);
                self.chevron.apply(&self.chevron_set, CLOSED);
            }
            None => {}
        }
    }

    /// Re-measure the content. Takes effect on the next open; an
    /// already-open panel snaps to the new height.
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        let (opening, closing) = Self::panel_sets(height);
        self.opening = opening;
        self.closing = closing;
        if self.open {
            self.content.set_property(PropertyId::Height, height.into());
        }
    }

    pub fn update(&mut self, dt: f32) -> bool {
        let reduced = self.preference.reduced();
        let content_done = self.content.step(dt, reduced);
        let chevron_done = self.chevron.step(dt, reduced);
        content_done && chevron_done
    }

    /// Height plus content opacity.
    pub fn panel_style(&self) -> ResolvedStyle {
        self.content.style()
    }

    /// Chevron rotation in degrees.
    pub fn chevron_rotation(&self) -> f32 {
        self.chevron.style().rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    fn run_for(accordion: &mut Accordion, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            accordion.update(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn opens_to_measured_height_and_turns_chevron() {
        let mut accordion = Accordion::new(240.0);
        accordion.set_open(true);
        run_for(&mut accordion, 0.45);
        let style = accordion.panel_style();
        assert_eq!(style.height, Some(240.0));
        assert_eq!(style.opacity, 1.0);
        assert_eq!(accordion.chevron_rotation(), 180.0);
    }

    #[test]
    fn opening_fade_lags_the_height() {
        let mut accordion = Accordion::new(240.0);
        accordion.set_open(true);
        // Inside the fade delay: the panel grows while content is
        // still fully transparent.
        run_for(&mut accordion, 0.08);
        let style = accordion.panel_style();
        assert!(style.height.unwrap() > 0.0);
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn closing_fade_starts_immediately() {
        let mut accordion = Accordion::new(240.0);
        accordion.set_open(true);
        run_for(&mut accordion, 0.45);
        accordion.set_open(false);
        accordion.update(1.0 / 60.0);
        assert!(accordion.panel_style().opacity < 1.0);
        run_for(&mut accordion, 0.35);
        assert_eq!(accordion.panel_style().height, Some(0.0));
        assert_eq!(accordion.chevron_rotation(), 0.0);
    }

    #[test]
    fn repeated_set_open_is_a_noop() {
        let mut accordion = Accordion::new(100.0);
        accordion.set_open(true);
        run_for(&mut accordion, 0.1);
        let before = accordion.panel_style().height;
        // Same value again must not restart the animation.
        accordion.set_open(true);
        let after = accordion.panel_style().height;
        assert_eq!(before, after);
    }

    #[test]
    fn interrupt_mid_open_reverses_from_current_height() {
        let mut accordion = Accordion::new(200.0);
        accordion.set_open(true);
        run_for(&mut accordion, 0.1);
        let mid = accordion.panel_style().height.unwrap();
        assert!(mid > 0.0 && mid < 200.0);
        accordion.set_open(false);
        accordion.update(1.0 / 60.0);
        // Closing starts from the interrupted height, not from 200.
        assert!(accordion.panel_style().height.unwrap() <= mid);
    }

    #[test]
    fn remeasure_while_open_snaps() {
        let mut accordion = Accordion::new(100.0);
        accordion.set_open(true);
        run_for(&mut accordion, 0.45);
        accordion.set_content_height(160.0);
        assert_eq!(accordion.panel_style().height, Some(160.0));
        // The next close/open cycle uses the new measurement.
        accordion.set_open(false);
        run_for(&mut accordion, 0.45);
        accordion.set_open(true);
        run_for(&mut accordion, 0.45);
        assert_eq!(accordion.panel_style().height, Some(160.0));
    }

    #[test]
    fn reduced_motion_snaps_open() {
        let mut accordion = Accordion::new(120.0);
        accordion.set_motion_preference(Arc::new(StaticPreference::new(true)));
        accordion.set_open(true);
        assert!(accordion.update(1.0 / 60.0));
        assert_eq!(accordion.panel_style().height, Some(120.0));
        assert_eq!(accordion.chevron_rotation(), 180.0);
    }
}
