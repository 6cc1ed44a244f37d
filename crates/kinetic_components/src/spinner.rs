//! Loading spinner

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::{KeyframeSet, Props};
use kinetic_animation::transition::{Repeat, TransitionSpec};
use kinetic_core::motion_policy::{self, MotionPreference};

const IDLE: &str = "idle";
const SPINNING: &str = "spinning";

/// Indeterminate spinner: one full turn per second, forever.
///
/// The rotation is an infinitely repeating linear tween, so it never
/// settles and [`update`](Self::update) keeps returning false while
/// spinning. Under reduced motion the spinner is the one component
/// that must keep signalling activity, so the host should swap it for
/// a static progress indicator when [`is_static`](Self::is_static).
pub struct Spinner {
    spin_set: KeyframeSet,
    stop_set: KeyframeSet,
    context: ElementAnimationContext,
    preference: Arc<dyn MotionPreference>,
}

impl Spinner {
    pub const PERIOD: f32 = 1.0;
    pub const STOP_FADE: f32 = 0.2;

    pub fn new() -> Self {
        let states = |set: KeyframeSet| {
            set.state(IDLE, Props::new().rotate(0.0))
                .state(SPINNING, Props::new().rotate(360.0))
        };
        let spin_set = states(KeyframeSet::new())
            .transition(TransitionSpec::tween(Self::PERIOD).with_repeat(Repeat::Infinite));
        // Stopping unwinds with a short finite tween; reusing the spin
        // transition would loop forever.
        let stop_set = states(KeyframeSet::new()).transition(TransitionSpec::tween(Self::STOP_FADE));
        let mut context = ElementAnimationContext::from_set(&spin_set, IDLE);
        context.apply(&spin_set, SPINNING);
        Self {
            spin_set,
            stop_set,
            context,
            preference: motion_policy::shared(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    /// True when motion is suppressed and the host should render a
    /// non-animated fallback.
    pub fn is_static(&self) -> bool {
        self.preference.reduced()
    }

    /// Unwind to the idle angle (e.g. content finished loading).
    pub fn stop(&mut self) {
        self.context.apply(&self.stop_set, IDLE);
    }

    /// Resume spinning after a stop.
    pub fn start(&mut self) {
        self.context.apply(&self.spin_set, SPINNING);
    }

    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }

    /// Current rotation in degrees, within `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.context.style().rotate
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    #[test]
    fn quarter_second_is_a_quarter_turn() {
        let mut spinner = Spinner::new();
        assert!(!spinner.update(0.25));
        assert!((spinner.rotation() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn wraps_every_period() {
        let mut spinner = Spinner::new();
        spinner.update(0.25);
        let first = spinner.rotation();
        spinner.update(Spinner::PERIOD);
        // One full period later the angle matches.
        assert!((spinner.rotation() - first).abs() < 1e-3);
    }

    #[test]
    fn never_settles_while_spinning() {
        let mut spinner = Spinner::new();
        for _ in 0..300 {
            assert!(!spinner.update(1.0 / 60.0));
        }
    }

    #[test]
    fn stop_settles_instead_of_looping() {
        let mut spinner = Spinner::new();
        spinner.update(0.3);
        spinner.stop();
        let mut settled = false;
        for _ in 0..60 {
            if spinner.update(1.0 / 60.0) {
                settled = true;
                break;
            }
        }
        assert!(settled);
        assert_eq!(spinner.rotation(), 0.0);
        // And spinning resumes on demand.
        spinner.start();
        assert!(!spinner.update(0.25));
    }

    #[test]
    fn reduced_motion_reports_static() {
        let mut spinner = Spinner::new();
        spinner.set_motion_preference(Arc::new(StaticPreference::new(true)));
        assert!(spinner.is_static());
        // The loop collapses instead of running.
        assert!(spinner.update(1.0 / 60.0));
    }
}
