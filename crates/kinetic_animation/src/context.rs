//! Per-element animation state
//!
//! An [`ElementAnimationContext`] owns the interpolated value of every
//! animated property of one element. Trigger evaluators push new state
//! targets into it; the host samples [`ResolvedStyle`] once per frame
//! and applies it at the rendering boundary.
//!
//! The core invariant: each property has exactly one active target at a
//! time. Retargeting discards any in-flight transition and restarts
//! from the *current interpolated value*; springs additionally keep
//! their velocity, so an interruption never causes a visual jump.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use kinetic_core::paint::{Color, Shadow};

use crate::keyframe::{KeyframeSet, PropertyTargets, StateName};
use crate::property::{AnimatableValue, Channels, PropertyId};
use crate::spring;
use crate::transition::{Repeat, TransitionSpec};

/// Interpolation state of a single property.
#[derive(Clone, Debug)]
struct PropertyTrack {
    current: AnimatableValue,
    target: AnimatableValue,
    /// Channel snapshot taken at the last retarget; tween start point.
    start: Channels,
    /// Per-channel velocity. Integrated by springs, carried across
    /// retargets; tweens leave it at zero.
    velocity: Channels,
    spec: TransitionSpec,
    elapsed: f32,
    settled: bool,
}

impl PropertyTrack {
    fn at_rest(value: AnimatableValue) -> Self {
        let start = value.channels();
        let velocity = SmallVec::from_elem(0.0, start.len());
        Self {
            current: value,
            target: value,
            start,
            velocity,
            spec: TransitionSpec::default(),
            elapsed: 0.0,
            settled: true,
        }
    }

    fn retarget(&mut self, target: AnimatableValue, spec: TransitionSpec) {
        if self.current.channel_count() != target.channel_count() {
            // Kind change (scalar vs color vs shadow) cannot interpolate.
            debug_assert!(false, "retarget changed the property's value kind");
            *self = Self::at_rest(target);
            return;
        }
        self.start = self.current.channels();
        self.target = target;
        self.spec = spec;
        self.elapsed = 0.0;
        self.settled = false;
        // velocity intentionally untouched: a spring picking up after a
        // spring inherits the in-flight velocity.
    }

    /// Advance by `dt` seconds. Returns the settled flag.
    fn step(&mut self, dt: f32, reduced_motion: bool) -> bool {
        if reduced_motion {
            self.current = self.target;
            self.velocity.iter_mut().for_each(|v| *v = 0.0);
            self.settled = true;
            return true;
        }
        if self.settled {
            return true;
        }
        self.elapsed += dt;
        match self.spec {
            TransitionSpec::Tween {
                duration,
                delay,
                easing,
                repeat,
            } => {
                let local = self.elapsed - delay;
                if local < 0.0 {
                    // Still inside the delay; hold the start value.
                    return false;
                }
                let phase = match repeat {
                    Repeat::None => {
                        if local >= duration {
                            self.current = self.target;
                            self.settled = true;
                            return true;
                        }
                        local / duration
                    }
                    Repeat::Count(n) => {
                        if local >= duration * n as f32 {
                            self.current = self.target;
                            self.settled = true;
                            return true;
                        }
                        (local % duration) / duration
                    }
                    Repeat::Infinite => (local % duration) / duration,
                };
                let eased = easing.apply(phase);
                let from = self.target.with_channels(&self.start);
                self.current = from.lerp(&self.target, eased);
                false
            }
            TransitionSpec::Spring(config) => {
                let target_channels = self.target.channels();
                let mut channels = self.current.channels();
                let mut all_rest = true;
                for (i, channel) in channels.iter_mut().enumerate() {
                    spring::integrate(
                        &config,
                        channel,
                        &mut self.velocity[i],
                        target_channels[i],
                        dt,
                    );
                    if !spring::at_rest(*channel, self.velocity[i], target_channels[i]) {
                        all_rest = false;
                    }
                }
                if all_rest {
                    // Steady state of a damped oscillator is the target;
                    // snap there exactly.
                    self.current = self.target;
                    self.velocity.iter_mut().for_each(|v| *v = 0.0);
                    self.settled = true;
                } else {
                    self.current = self.current.with_channels(&channels);
                }
                self.settled
            }
        }
    }
}

/// The per-frame output consumed by the rendering boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Degrees.
    pub rotate: f32,
    /// Present only for components that animate their content height.
    pub height: Option<f32>,
    pub background: Option<Color>,
    pub shadow: Option<Shadow>,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            height: None,
            background: None,
            shadow: None,
        }
    }
}

/// Animation state for one mounted element.
pub struct ElementAnimationContext {
    tracks: FxHashMap<PropertyId, PropertyTrack>,
    state: StateName,
    ticks: u64,
}

impl ElementAnimationContext {
    /// Create a context at rest in `initial_state` with the given
    /// property values.
    pub fn new(initial_state: StateName, initial: PropertyTargets) -> Self {
        let tracks = initial
            .into_iter()
            .map(|(id, value)| (id, PropertyTrack::at_rest(value)))
            .collect();
        Self {
            tracks,
            state: initial_state,
            ticks: 0,
        }
    }

    /// Create a context seeded from a keyframe set's state. A state
    /// unknown to the set yields an empty context in that state.
    pub fn from_set(set: &KeyframeSet, initial_state: StateName) -> Self {
        let targets = set.targets(initial_state).cloned().unwrap_or_default();
        Self::new(initial_state, targets)
    }

    pub fn state(&self) -> StateName {
        self.state
    }

    /// Frames evaluated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Select a new target state from `set`.
    ///
    /// Re-selecting the current state is a no-op. Properties without a
    /// target in the new state hold their last value. A property whose
    /// first appearance is in this state has no prior value to travel
    /// from, so it appears at the target directly.
    pub fn apply(&mut self, set: &KeyframeSet, state: StateName) {
        if state == self.state {
            return;
        }
        trace!(from = self.state, to = state, "retarget");
        self.state = state;
        let Some(targets) = set.targets(state) else {
            return;
        };
        for (&id, &value) in targets {
            let spec = *set.transition_for(id);
            match self.tracks.entry(id) {
                std::collections::hash_map::Entry::Occupied(mut entry) => {
                    entry.get_mut().retarget(value, spec);
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(PropertyTrack::at_rest(value));
                }
            }
        }
    }

    /// Retarget a single property outside the keyframe-set states, used
    /// for continuous inputs such as pointer-offset follow.
    pub fn retarget_property(
        &mut self,
        id: PropertyId,
        value: AnimatableValue,
        spec: TransitionSpec,
    ) {
        match self.tracks.entry(id) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                entry.get_mut().retarget(value, spec);
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(PropertyTrack::at_rest(value));
            }
        }
    }

    /// Write a property instantly, bypassing interpolation (e.g. a
    /// re-measured content height while collapsed).
    pub fn set_property(&mut self, id: PropertyId, value: AnimatableValue) {
        self.tracks.insert(id, PropertyTrack::at_rest(value));
    }

    /// Advance every property by `dt` seconds. Returns true when all
    /// properties are settled. With `reduced_motion` set, every property
    /// settles on this evaluation.
    pub fn step(&mut self, dt: f32, reduced_motion: bool) -> bool {
        self.ticks += 1;
        let mut all_settled = true;
        for track in self.tracks.values_mut() {
            if !track.step(dt, reduced_motion) {
                all_settled = false;
            }
        }
        all_settled
    }

    pub fn is_settled(&self) -> bool {
        self.tracks.values().all(|t| t.settled)
    }

    /// Current interpolated value of a property.
    pub fn value(&self, id: PropertyId) -> Option<AnimatableValue> {
        self.tracks.get(&id).map(|t| t.current)
    }

    fn scalar_or(&self, id: PropertyId, default: f32) -> f32 {
        self.value(id).and_then(|v| v.as_scalar()).unwrap_or(default)
    }

    /// Snapshot for the rendering boundary.
    pub fn style(&self) -> ResolvedStyle {
        ResolvedStyle {
            opacity: self.scalar_or(PropertyId::Opacity, 1.0),
            x: self.scalar_or(PropertyId::X, 0.0),
            y: self.scalar_or(PropertyId::Y, 0.0),
            scale: self.scalar_or(PropertyId::Scale, 1.0),
            rotate: self.scalar_or(PropertyId::Rotate, 0.0),
            height: self.value(PropertyId::Height).and_then(|v| v.as_scalar()),
            background: self
                .value(PropertyId::BackgroundColor)
                .and_then(|v| v.as_color()),
            shadow: self.value(PropertyId::BoxShadow).and_then(|v| v.as_shadow()),
        }
    }
}
