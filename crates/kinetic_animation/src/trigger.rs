//! Trigger evaluation
//!
//! Triggers map raw host events to named interaction states. They own
//! no animation values: on every state change they hand a state name to
//! the caller, which pushes it into the element's animation context.

use tracing::trace;

use kinetic_core::events::InputEvent;
use kinetic_core::geometry::{Point, Rect};

use crate::keyframe::StateName;
use crate::transition::ConfigError;

/// State names shared by the pointer and viewport evaluators.
pub mod states {
    pub const BASE: &str = "base";
    pub const HOVERED: &str = "hovered";
    pub const FOCUSED: &str = "focused";
    pub const PRESSED: &str = "pressed";
    pub const HIDDEN: &str = "hidden";
    pub const VISIBLE: &str = "visible";
}

/// One-shot entrance trigger.
///
/// Fires on the first mount only; re-renders never replay it. An
/// explicit [`reset`](Self::reset) re-arms it for hosts that recycle
/// elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct MountTrigger {
    fired: bool,
}

impl MountTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }
}

/// Pointer and focus state evaluator.
///
/// Tracks the hovered/focused/pressed flags and derives the interaction
/// state by priority `pressed > hovered > focused > base`. The priority
/// order encodes the reversion rules directly: releasing a press falls
/// back to whatever flags still hold (hover, else focus, else base),
/// and leaving while focused lands on the focused state rather than
/// base.
#[derive(Clone, Copy, Debug)]
pub struct PointerInteraction {
    hovered: bool,
    focused: bool,
    pressed: bool,
    state: StateName,
}

impl Default for PointerInteraction {
    fn default() -> Self {
        Self {
            hovered: false,
            focused: false,
            pressed: false,
            state: states::BASE,
        }
    }
}

impl PointerInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StateName {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one event. Returns the new state only when it changed.
    pub fn handle(&mut self, event: &InputEvent) -> Option<StateName> {
        match event {
            InputEvent::PointerEnter { .. } => self.hovered = true,
            InputEvent::PointerLeave => {
                // Leaving also cancels an in-progress press.
                self.hovered = false;
                self.pressed = false;
            }
            InputEvent::PointerDown => self.pressed = true,
            InputEvent::PointerUp => self.pressed = false,
            InputEvent::Focus => self.focused = true,
            InputEvent::Blur => self.focused = false,
            _ => return None,
        }

        let next = if self.pressed {
            states::PRESSED
        } else if self.hovered {
            states::HOVERED
        } else if self.focused {
            states::FOCUSED
        } else {
            states::BASE
        };

        if next != self.state {
            trace!(from = self.state, to = next, "pointer state change");
            self.state = next;
            Some(next)
        } else {
            None
        }
    }
}

/// Viewport-intersection trigger.
///
/// Fires `visible` the first time the observed fraction crosses the
/// threshold. With `once` set, later exits and re-entries are ignored;
/// otherwise the state toggles on every crossing.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTrigger {
    threshold: f32,
    once: bool,
    visible: bool,
    fired: bool,
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            once: false,
            visible: false,
            fired: false,
        }
    }
}

impl ViewportTrigger {
    /// Default trigger: any overlap counts, toggling on each crossing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `threshold` of the element to be visible.
    /// Values outside `[0, 1]` are clamped; [`validate_threshold`]
    /// rejects them instead.
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Stop observing after the first entry.
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Keep toggling on every crossing (undoes [`once`](Self::once)).
    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an observed visibility fraction. Returns `visible` or
    /// `hidden` on a threshold crossing, `None` otherwise.
    pub fn observe(&mut self, fraction: f32) -> Option<StateName> {
        if self.once && self.fired {
            return None;
        }
        // "Any overlap" means strictly positive; a configured threshold
        // counts when reached.
        let now_visible = if self.threshold == 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        };
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        if now_visible {
            self.fired = true;
            trace!(fraction, "viewport enter");
            Some(states::VISIBLE)
        } else {
            trace!(fraction, "viewport exit");
            Some(states::HIDDEN)
        }
    }
}

/// Reject a viewport threshold outside `[0, 1]`.
pub fn validate_threshold(threshold: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ConfigError::ThresholdOutOfRange(threshold))
    }
}

/// Edge produced by a controlled boolean prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlledEdge {
    /// false → true
    Set,
    /// true → false
    Unset,
}

/// Controlled components (toggle, accordion, modal) carry no internal
/// state machine: the trigger is a pure function of the previous and
/// current caller-supplied boolean.
pub fn controlled_edge(previous: bool, current: bool) -> Option<ControlledEdge> {
    match (previous, current) {
        (false, true) => Some(ControlledEdge::Set),
        (true, false) => Some(ControlledEdge::Unset),
        _ => None,
    }
}

/// Pointer-offset evaluator for the magnetic-follow effect.
///
/// On every pointer move, the offset target is the vector from the
/// element center to the pointer scaled by `strength`, so the element is
/// pulled toward the cursor without fully tracking it. Leaving resets
/// the target to zero; the caller animates both via spring so nothing
/// snaps.
///
/// The bounding box is captured once per gesture (on pointer-enter) and
/// refreshed only by an explicit resize event, keeping the per-move
/// path free of measurement.
#[derive(Clone, Copy, Debug)]
pub struct MagneticTracker {
    strength: f32,
    bounds: Option<Rect>,
}

/// Fraction of the raw center distance applied as offset.
pub const DEFAULT_MAGNETIC_STRENGTH: f32 = 0.3;

impl Default for MagneticTracker {
    fn default() -> Self {
        Self {
            strength: DEFAULT_MAGNETIC_STRENGTH,
            bounds: None,
        }
    }
}

impl MagneticTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength.max(0.0);
        self
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Feed one event. Returns a new `(x, y)` offset target when one
    /// should be applied.
    ///
    /// A move without a measured bounding box (before first paint)
    /// no-ops for that event; the next event retries.
    pub fn handle(&mut self, event: &InputEvent) -> Option<(f32, f32)> {
        match event {
            InputEvent::PointerEnter { bounds } => {
                self.bounds = *bounds;
                None
            }
            InputEvent::Resize { bounds } => {
                self.bounds = Some(*bounds);
                None
            }
            InputEvent::PointerMove { position } => {
                let bounds = self.bounds?;
                Some(self.offset_for(*position, bounds.center()))
            }
            InputEvent::PointerLeave => {
                self.bounds = None;
                Some((0.0, 0.0))
            }
            _ => None,
        }
    }

    fn offset_for(&self, pointer: Point, center: Point) -> (f32, f32) {
        (
            (pointer.x - center.x) * self.strength,
            (pointer.y - center.y) * self.strength,
        )
    }
}
