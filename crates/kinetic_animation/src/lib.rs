//! Kinetic Animation Engine
//!
//! Maps discrete interaction states to continuous visual properties.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: duration/delay/easing transitions, including CSS cubic-bezier
//! - **Keyframe Sets**: named interaction states with per-property targets
//! - **Interruptible**: retargeting restarts from the current value and
//!   springs inherit velocity, so motion is never discontinuous
//! - **Triggers**: mount, pointer/focus, viewport, controlled boolean,
//!   and pointer-offset (magnetic) evaluation
//! - **Stagger**: per-child trigger-time offsets across a group
//! - **Reduced Motion**: every evaluation collapses to its end state when
//!   the process-wide preference asks for it

pub mod context;
pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod property;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod transition;
pub mod trigger;

pub use context::{ElementAnimationContext, ResolvedStyle};
pub use easing::Easing;
pub use keyframe::{KeyframeSet, Props, PropertyTargets, StateName};
pub use presets::SlideDirection;
pub use property::{AnimatableValue, PropertyId};
pub use scheduler::{AnimationScheduler, ElementId};
pub use spring::{Spring, SpringConfig};
pub use stagger::{StaggerDirection, StaggerGroup};
pub use transition::{ConfigError, Repeat, TransitionSpec};
pub use trigger::{
    controlled_edge, ControlledEdge, MagneticTracker, MountTrigger, PointerInteraction,
    ViewportTrigger,
};
