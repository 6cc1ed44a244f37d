//! Canned keyframe sets for the common entrance patterns.
//!
//! Every preset produces a plain [`KeyframeSet`] between the shared
//! `hidden` and `visible` states, so components can start from one and
//! layer their own states on top.

use crate::easing::Easing;
use crate::keyframe::{KeyframeSet, Props};
use crate::transition::TransitionSpec;
use crate::trigger::states;

/// Direction an element slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    /// Starts below its resting place and rises.
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl SlideDirection {
    /// Starting `(x, y)` offset for a slide over `distance` pixels.
    /// Y grows downward, so sliding up starts at a positive offset.
    pub fn offset(self, distance: f32) -> (f32, f32) {
        match self {
            SlideDirection::Up => (0.0, distance),
            SlideDirection::Down => (0.0, -distance),
            SlideDirection::Left => (distance, 0.0),
            SlideDirection::Right => (-distance, 0.0),
        }
    }
}

/// Fade in while rising `distance` pixels into place.
pub fn fade_up(distance: f32, duration: f32, delay: f32) -> KeyframeSet {
    slide_reveal(SlideDirection::Up, distance, duration, delay)
}

/// Fade in while sliding from `direction` into place.
pub fn slide_reveal(
    direction: SlideDirection,
    distance: f32,
    duration: f32,
    delay: f32,
) -> KeyframeSet {
    let (x, y) = direction.offset(distance);
    KeyframeSet::new()
        .state(states::HIDDEN, Props::new().opacity(0.0).x(x).y(y))
        .state(states::VISIBLE, Props::new().opacity(1.0).x(0.0).y(0.0))
        .transition(
            TransitionSpec::tween(duration)
                .with_delay(delay)
                .with_easing(Easing::ENTRANCE),
        )
}

/// Plain opacity fade.
pub fn fade(duration: f32) -> KeyframeSet {
    KeyframeSet::new()
        .state(states::HIDDEN, Props::new().opacity(0.0))
        .state(states::VISIBLE, Props::new().opacity(1.0))
        .transition(TransitionSpec::tween(duration).with_easing(Easing::ENTRANCE))
}
