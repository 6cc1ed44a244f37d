//! Keyframe sets
//!
//! A [`KeyframeSet`] names the interaction states of one element and
//! the property targets for each. States need not be exhaustive: when a
//! state has no target for a property, that property simply holds its
//! last value. A set carries one default [`TransitionSpec`] plus
//! optional per-property overrides (the override wins).

use rustc_hash::FxHashMap;

use kinetic_core::paint::{Color, Shadow};

use crate::property::{AnimatableValue, PropertyId};
use crate::transition::TransitionSpec;

/// Named interaction state (`"base"`, `"hovered"`, `"visible"`, ...).
pub type StateName = &'static str;

/// Target values for one state.
pub type PropertyTargets = FxHashMap<PropertyId, AnimatableValue>;

/// Fluent builder for the property targets of a single state.
///
/// # Example
///
/// ```
/// use kinetic_animation::{KeyframeSet, Props, TransitionSpec};
///
/// let set = KeyframeSet::new()
///     .state("hidden", Props::new().opacity(0.0).y(20.0))
///     .state("visible", Props::new().opacity(1.0).y(0.0))
///     .transition(TransitionSpec::tween(0.6));
/// assert!(set.has_state("hidden"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Props {
    targets: PropertyTargets,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.targets
            .insert(PropertyId::Opacity, AnimatableValue::Scalar(value));
        self
    }

    pub fn x(mut self, px: f32) -> Self {
        self.targets
            .insert(PropertyId::X, AnimatableValue::Scalar(px));
        self
    }

    pub fn y(mut self, px: f32) -> Self {
        self.targets
            .insert(PropertyId::Y, AnimatableValue::Scalar(px));
        self
    }

    pub fn scale(mut self, factor: f32) -> Self {
        self.targets
            .insert(PropertyId::Scale, AnimatableValue::Scalar(factor));
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.targets
            .insert(PropertyId::Rotate, AnimatableValue::Scalar(degrees));
        self
    }

    pub fn height(mut self, px: f32) -> Self {
        self.targets
            .insert(PropertyId::Height, AnimatableValue::Scalar(px));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.targets
            .insert(PropertyId::BackgroundColor, AnimatableValue::Color(color));
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.targets
            .insert(PropertyId::BoxShadow, AnimatableValue::Shadow(shadow));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl From<Props> for PropertyTargets {
    fn from(props: Props) -> Self {
        props.targets
    }
}

/// State-name → property-target mapping with transition specs.
#[derive(Clone, Debug, Default)]
pub struct KeyframeSet {
    states: FxHashMap<StateName, PropertyTargets>,
    default_transition: TransitionSpec,
    property_transitions: FxHashMap<PropertyId, TransitionSpec>,
}

impl KeyframeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a state's targets.
    pub fn state(mut self, name: StateName, targets: impl Into<PropertyTargets>) -> Self {
        self.states.insert(name, targets.into());
        self
    }

    /// Set the set-level default transition.
    pub fn transition(mut self, spec: TransitionSpec) -> Self {
        self.default_transition = spec;
        self
    }

    /// Override the transition for a single property.
    pub fn property_transition(mut self, id: PropertyId, spec: TransitionSpec) -> Self {
        self.property_transitions.insert(id, spec);
        self
    }

    pub fn targets(&self, name: StateName) -> Option<&PropertyTargets> {
        self.states.get(name)
    }

    pub fn has_state(&self, name: StateName) -> bool {
        self.states.contains_key(name)
    }

    /// The transition governing `id`: the per-property override when one
    /// exists, otherwise the set default.
    pub fn transition_for(&self, id: PropertyId) -> &TransitionSpec {
        self.property_transitions
            .get(&id)
            .unwrap_or(&self.default_transition)
    }

    pub fn default_transition(&self) -> &TransitionSpec {
        &self.default_transition
    }

    pub fn state_names(&self) -> impl Iterator<Item = StateName> + '_ {
        self.states.keys().copied()
    }
}
