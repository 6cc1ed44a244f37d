//! Kinetic Core
//!
//! Foundational primitives for the Kinetic animation engine:
//!
//! - **Input Events**: pointer, focus, viewport, and lifecycle events
//!   delivered by the host environment
//! - **Geometry**: rects and viewport-intersection math
//! - **Paint Types**: colors and shadows with channel-wise interpolation
//! - **Motion Policy**: the process-wide reduced-motion preference
//!
//! The rendering boundary is external: this crate never draws anything,
//! it only describes inputs and interpolatable visual values.

pub mod events;
pub mod geometry;
pub mod motion_policy;
pub mod paint;

pub use events::InputEvent;
pub use geometry::{visible_fraction, Point, Rect, Size};
pub use motion_policy::{reduced_motion, MotionPreference, StaticPreference};
pub use paint::{Color, Shadow};
