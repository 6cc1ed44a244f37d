//! Frame scheduler
//!
//! Owns every mounted element's animation context plus a queue of
//! delayed state triggers. The host drives it with one [`tick`] per
//! frame; everything else (delay delivery, reduced-motion collapse,
//! settling) happens inside.
//!
//! [`tick`]: AnimationScheduler::tick

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use kinetic_core::motion_policy::{self, MotionPreference};

use crate::context::{ElementAnimationContext, ResolvedStyle};
use crate::keyframe::{KeyframeSet, StateName};

new_key_type! {
    /// Stable handle for a mounted element. Generational, so handles
    /// to unmounted elements never alias a newer element.
    pub struct ElementId;
}

struct ElementEntry {
    context: ElementAnimationContext,
    set: KeyframeSet,
}

/// A state change waiting for the clock to reach `due`.
#[derive(Clone, Copy, Debug)]
struct PendingTrigger {
    element: ElementId,
    state: StateName,
    due: f32,
}

/// Central animation driver.
pub struct AnimationScheduler {
    elements: SlotMap<ElementId, ElementEntry>,
    pending: Vec<PendingTrigger>,
    clock: f32,
    preference: Arc<dyn MotionPreference>,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    /// Scheduler reading the process-wide motion preference.
    pub fn new() -> Self {
        Self::with_preference(motion_policy::shared())
    }

    /// Scheduler with an injected preference, for hosts and tests that
    /// bypass the global.
    pub fn with_preference(preference: Arc<dyn MotionPreference>) -> Self {
        Self {
            elements: SlotMap::with_key(),
            pending: Vec::new(),
            clock: 0.0,
            preference,
        }
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.preference = preference;
    }

    /// Register an element in `initial_state` and return its handle.
    pub fn mount(&mut self, set: KeyframeSet, initial_state: StateName) -> ElementId {
        let context = ElementAnimationContext::from_set(&set, initial_state);
        let id = self.elements.insert(ElementEntry { context, set });
        debug!(?id, state = initial_state, "mount");
        id
    }

    /// Drop an element and any triggers still queued for it.
    pub fn unmount(&mut self, id: ElementId) {
        if self.elements.remove(id).is_some() {
            self.pending.retain(|trigger| trigger.element != id);
            debug!(?id, "unmount");
        }
    }

    /// Queue a state change `delay` seconds from now.
    pub fn schedule_in(&mut self, id: ElementId, state: StateName, delay: f32) {
        self.pending.push(PendingTrigger {
            element: id,
            state,
            due: self.clock + delay.max(0.0),
        });
    }

    /// Apply a state change immediately.
    pub fn trigger_now(&mut self, id: ElementId, state: StateName) {
        if let Some(entry) = self.elements.get_mut(id) {
            entry.context.apply(&entry.set, state);
        }
    }

    /// Advance the clock, deliver due triggers, and step every context.
    /// Returns true while anything is still animating or queued.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.clock += dt.max(0.0);

        if !self.pending.is_empty() {
            let clock = self.clock;
            let mut due: Vec<PendingTrigger> = Vec::new();
            self.pending.retain(|trigger| {
                if trigger.due <= clock {
                    due.push(*trigger);
                    false
                } else {
                    true
                }
            });
            // Deliver in schedule order so same-frame triggers on one
            // element resolve to the last one queued.
            due.sort_by(|a, b| a.due.total_cmp(&b.due));
            for trigger in due {
                // Unmounted between queue and delivery: drop silently.
                if let Some(entry) = self.elements.get_mut(trigger.element) {
                    entry.context.apply(&entry.set, trigger.state);
                }
            }
        }

        let reduced = self.preference.reduced();
        let mut active = false;
        for entry in self.elements.values_mut() {
            if !entry.context.step(dt, reduced) {
                active = true;
            }
        }
        active || !self.pending.is_empty()
    }

    /// Current interpolated style for an element, if still mounted.
    pub fn style(&self, id: ElementId) -> Option<ResolvedStyle> {
        self.elements.get(id).map(|entry| entry.context.style())
    }

    pub fn context(&self, id: ElementId) -> Option<&ElementAnimationContext> {
        self.elements.get(id).map(|entry| &entry.context)
    }

    pub fn context_mut(&mut self, id: ElementId) -> Option<&mut ElementAnimationContext> {
        self.elements.get_mut(id).map(|entry| &mut entry.context)
    }

    /// Earliest pending trigger time for an element, relative to the
    /// scheduler clock at zero.
    pub fn scheduled_at(&self, id: ElementId) -> Option<f32> {
        self.pending
            .iter()
            .filter(|trigger| trigger.element == id)
            .map(|trigger| trigger.due)
            .min_by(f32::total_cmp)
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn has_active_animations(&self) -> bool {
        !self.pending.is_empty()
            || self
                .elements
                .values()
                .any(|entry| !entry.context.is_settled())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::property::PropertyId;
    use kinetic_core::motion_policy::StaticPreference;

    #[test]
    fn delayed_trigger_fires_at_due_time() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.mount(presets::fade_up(20.0, 0.5, 0.0), "hidden");
        scheduler.schedule_in(id, "visible", 0.2);

        scheduler.tick(0.1);
        assert_eq!(scheduler.context(id).unwrap().state(), "hidden");

        scheduler.tick(0.1);
        assert_eq!(scheduler.context(id).unwrap().state(), "visible");
    }

    #[test]
    fn unmount_drops_pending_triggers() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.mount(presets::fade_up(20.0, 0.5, 0.0), "hidden");
        scheduler.schedule_in(id, "visible", 0.1);
        scheduler.unmount(id);
        assert!(scheduler.scheduled_at(id).is_none());
        // The dead handle is ignored everywhere.
        assert!(scheduler.style(id).is_none());
        scheduler.trigger_now(id, "visible");
        assert!(!scheduler.tick(0.2));
    }

    #[test]
    fn tick_reports_activity_until_settled() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.mount(presets::fade_up(20.0, 0.3, 0.0), "hidden");
        scheduler.trigger_now(id, "visible");
        assert!(scheduler.tick(0.1));
        assert!(!scheduler.tick(0.3));
        let style = scheduler.style(id).unwrap();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.y, 0.0);
    }

    #[test]
    fn reduced_motion_collapses_everything_in_one_tick() {
        let preference = Arc::new(StaticPreference::new(true));
        let mut scheduler = AnimationScheduler::with_preference(preference);
        let id = scheduler.mount(presets::fade_up(20.0, 0.6, 0.0), "hidden");
        scheduler.trigger_now(id, "visible");
        assert!(!scheduler.tick(1.0 / 60.0));
        assert_eq!(scheduler.style(id).unwrap().opacity, 1.0);
    }

    #[test]
    fn same_frame_triggers_apply_in_schedule_order() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.mount(presets::fade_up(20.0, 0.5, 0.0), "hidden");
        scheduler.schedule_in(id, "visible", 0.01);
        scheduler.schedule_in(id, "hidden", 0.02);
        scheduler.tick(0.05);
        assert_eq!(scheduler.context(id).unwrap().state(), "hidden");
    }

    #[test]
    fn pending_keeps_scheduler_active() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.mount(presets::fade_up(20.0, 0.1, 0.0), "hidden");
        scheduler.schedule_in(id, "visible", 1.0);
        // Nothing animating yet, but the queue holds work.
        assert!(scheduler.tick(0.1));
        assert!(scheduler.has_active_animations());
        let _ = scheduler
            .context(id)
            .unwrap()
            .value(PropertyId::Opacity)
            .unwrap();
    }
}
