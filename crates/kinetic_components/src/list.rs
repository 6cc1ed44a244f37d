//! Staggered list entrance

use std::sync::Arc;

use kinetic_animation::context::{ElementAnimationContext, ResolvedStyle};
use kinetic_animation::keyframe::KeyframeSet;
use kinetic_animation::presets;
use kinetic_animation::scheduler::{AnimationScheduler, ElementId};
use kinetic_animation::stagger::{StaggerDirection, StaggerGroup};
use kinetic_animation::trigger::{states, MountTrigger};
use kinetic_core::events::InputEvent;
use kinetic_core::motion_policy::{self, MotionPreference};

/// List whose children fade up one after another.
///
/// Each child gets its own animation context; the stagger group spaces
/// their trigger times. Children past their delay animate while
/// earlier-delayed ones still sit in the hidden state, so a long list
/// ripples instead of popping in at once.
pub struct StaggeredList {
    scheduler: AnimationScheduler,
    group: StaggerGroup,
    container: ElementAnimationContext,
    container_set: KeyframeSet,
    mount: MountTrigger,
    preference: Arc<dyn MotionPreference>,
}

impl StaggeredList {
    pub const INCREMENT: f32 = 0.1;
    pub const CHILD_DURATION: f32 = 0.5;
    pub const CHILD_DISTANCE: f32 = 20.0;
    pub const CONTAINER_FADE: f32 = 0.3;

    pub fn new(child_count: usize) -> Self {
        Self::with_stagger(child_count, StaggerGroup::new(Self::INCREMENT))
    }

    /// Custom delay policy (direction, base delay, limit).
    pub fn with_stagger(child_count: usize, mut group: StaggerGroup) -> Self {
        let mut scheduler = AnimationScheduler::new();
        let set = presets::fade_up(Self::CHILD_DISTANCE, Self::CHILD_DURATION, 0.0);
        for _ in 0..child_count {
            group.push(scheduler.mount(set.clone(), states::HIDDEN));
        }
        let container_set = presets::fade(Self::CONTAINER_FADE);
        let container = ElementAnimationContext::from_set(&container_set, states::HIDDEN);
        Self {
            scheduler,
            group,
            container,
            container_set,
            mount: MountTrigger::new(),
            preference: motion_policy::shared(),
        }
    }

    pub fn direction(mut self, direction: StaggerDirection) -> Self {
        self.group = self.group.direction(direction);
        self
    }

    pub fn set_motion_preference(&mut self, preference: Arc<dyn MotionPreference>) {
        self.scheduler.set_motion_preference(preference.clone());
        self.preference = preference;
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if matches!(event, InputEvent::Mount) {
            self.mounted();
        }
    }

    /// Start the staggered entrance. Idempotent.
    pub fn mounted(&mut self) {
        if self.mount.fire() {
            self.container.apply(&self.container_set, states::VISIBLE);
            self.group.fire(&mut self.scheduler, states::VISIBLE);
        }
    }

    /// Advance by `dt` seconds. Returns true once the container and
    /// every child settled.
    pub fn update(&mut self, dt: f32) -> bool {
        let container_done = self.container.step(dt, self.preference.reduced());
        let children_done = !self.scheduler.tick(dt);
        container_done && children_done
    }

    /// Container opacity wrapping the children.
    pub fn container_style(&self) -> ResolvedStyle {
        self.container.style()
    }

    pub fn child_style(&self, index: usize) -> Option<ResolvedStyle> {
        let id = self.child_id(index)?;
        self.scheduler.style(id)
    }

    fn child_id(&self, index: usize) -> Option<ElementId> {
        self.group.children().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::motion_policy::StaticPreference;

    fn run_for(list: &mut StaggeredList, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            list.update(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn later_children_wait_their_turn() {
        let mut list = StaggeredList::new(4);
        list.mounted();
        // At 0.15s child 0 is animating but child 2 (due at 0.2s) is
        // still fully hidden.
        run_for(&mut list, 0.15);
        let first = list.child_style(0).unwrap();
        let third = list.child_style(2).unwrap();
        assert!(first.opacity > 0.0);
        assert_eq!(third.opacity, 0.0);
        assert_eq!(third.y, 20.0);
    }

    #[test]
    fn all_children_settle_visible() {
        let mut list = StaggeredList::new(3);
        list.mounted();
        // Last child due at 0.2s plus 0.5s duration.
        run_for(&mut list, 0.9);
        assert!(list.update(1.0 / 60.0));
        for i in 0..3 {
            let style = list.child_style(i).unwrap();
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.y, 0.0);
        }
    }

    #[test]
    fn remount_does_not_replay() {
        let mut list = StaggeredList::new(2);
        list.mounted();
        run_for(&mut list, 0.8);
        list.mounted();
        assert!(list.update(1.0 / 60.0));
    }

    #[test]
    fn reduced_motion_shows_all_children_at_once() {
        let mut list = StaggeredList::new(3);
        list.set_motion_preference(Arc::new(StaticPreference::new(true)));
        list.mounted();
        // Delays still gate delivery; step past the last one.
        run_for(&mut list, 0.25);
        for i in 0..3 {
            assert_eq!(list.child_style(i).unwrap().opacity, 1.0);
        }
    }

    #[test]
    fn container_fades_in_with_the_children() {
        let mut list = StaggeredList::new(2);
        assert_eq!(list.container_style().opacity, 0.0);
        list.mounted();
        run_for(&mut list, 0.4);
        assert_eq!(list.container_style().opacity, 1.0);
    }

    #[test]
    fn out_of_range_child_is_none() {
        let list = StaggeredList::new(1);
        assert!(list.child_style(5).is_none());
    }
}
