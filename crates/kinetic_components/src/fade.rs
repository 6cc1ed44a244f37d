//! Fade-up entrance

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::KeyframeSet;
use kinetic_animation::presets;
use kinetic_animation::trigger::{states, MountTrigger};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};

/// Element that fades in while rising into place when first mounted.
///
/// Fires once per lifetime; repainting an already-mounted element does
/// not replay the entrance.
pub struct FadeUp {
    set: KeyframeSet,
    context: ElementAnimationContext,
    mount: MountTrigger,
    preference: Arc<dyn MotionPreference>,
}

impl FadeUp {
    pub const DURATION: f32 = 0.6;
    pub const DISTANCE: f32 = 20.0;

    pub fn new() -> Self {
        Self::with_delay(0.0)
    }

    /// Entrance delayed by `delay` seconds, for hand-sequenced groups.
    pub fn with_delay(delay: f32) -> Self {
        Self::with_timing(Self::DURATION, delay)
    }

    pub fn with_timing(duration: f32, delay: f32) -> Self {
        let set = presets::fade_up(Self::DISTANCE, duration, delay);
        let context = ElementAnimationContext::from_set(&set, states::HIDDEN);
        Self {
            set,
            context,
            mount: MountTrigger::new(),
            preference: motion_policy::shared(),
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    /// Notify the component it has been mounted. Idempotent.
    pub fn mounted(&mut self) {
        if self.mount.fire() {
            self.context.apply(&self.set, states::VISIBLE);
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if matches!(event, InputEvent::Mount) {
            self.mounted();
        }
    }

    /// Advance by `dt` seconds. Returns true once settled.
    pub fn update(&mut self, dt: f32) -> bool {
        self.context.step(dt, self.preference.reduced())
    }

    pub fn style(&self) -> ResolvedStyle {
        self.context.style()
    }
}

impl Default for FadeUp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    fn run_for(component: &mut FadeUp, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            component.update(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn starts_invisible_and_offset() {
        let component = FadeUp::new();
        let style = component.style();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.y, 20.0);
    }

    #[test]
    fn mount_plays_entrance_to_exact_rest() {
        let mut component = FadeUp::new();
        component.mounted();
        run_for(&mut component, 0.7);
        let style = component.style();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.y, 0.0);
    }

    #[test]
    fn remount_does_not_replay() {
        let mut component = FadeUp::new();
        component.mounted();
        run_for(&mut component, 0.7);
        component.mounted();
        assert!(component.update(1.0 / 60.0));
        assert_eq!(component.style().opacity, 1.0);
    }

    #[test]
    fn reduced_motion_jumps_to_rest() {
        let mut component = FadeUp::new();
        component.set_motion_preference(Arc::new(StaticPreference::new(true)));
        component.mounted();
        assert!(component.update(1.0 / 60.0));
        assert_eq!(component.style().opacity, 1.0);
        assert_eq!(component.style().y, 0.0);
    }
}
