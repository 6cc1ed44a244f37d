//! Input events
//!
//! The host environment (windowing system, DOM binding, test harness)
//! translates its native events into [`InputEvent`] and feeds them to
//! component trigger evaluators. Events carry only the data the engine
//! consumes; everything else stays on the host side.

use crate::geometry::{Point, Rect};

/// A discrete interaction event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The element entered the tree. Fires the one-shot entrance trigger.
    Mount,
    /// The element is being removed. All listeners and animation state
    /// for it must be released synchronously.
    Unmount,

    /// Pointer crossed into the element's bounds.
    PointerEnter {
        /// Element bounding box at gesture start, if the host has
        /// measured it. `None` before first paint.
        bounds: Option<Rect>,
    },
    /// Pointer left the element's bounds.
    PointerLeave,
    /// Pointer moved while over the element.
    PointerMove { position: Point },
    /// Primary button / touch went down over the element.
    PointerDown,
    /// Primary button / touch released.
    PointerUp,

    /// Keyboard focus arrived.
    Focus,
    /// Keyboard focus left.
    Blur,

    /// Visible fraction of the element within its scroll container,
    /// reported by the host's intersection machinery.
    ViewportUpdate { fraction: f32 },

    /// Element bounds changed (layout or window resize).
    Resize { bounds: Rect },
}
