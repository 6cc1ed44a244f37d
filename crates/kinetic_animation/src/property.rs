//! Animatable properties
//!
//! Every property value decomposes into a small vector of scalar
//! channels for interpolation and recomposes afterwards. That keeps one
//! interpolation core for scalars, colors, and composite shadows alike;
//! nothing ever interpolates a formatted string.

use kinetic_core::paint::{Color, Shadow};
use smallvec::SmallVec;

/// Identifies one animatable visual property of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Opacity,
    /// Horizontal translation, logical pixels.
    X,
    /// Vertical translation, logical pixels.
    Y,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    Rotate,
    /// Content height, logical pixels (expand/collapse effects).
    Height,
    BackgroundColor,
    BoxShadow,
}

/// Widest channel vector: a shadow (offsets, blur, spread, RGBA).
pub const MAX_CHANNELS: usize = 8;

/// Scalar channel buffer sized to avoid heap allocation.
pub type Channels = SmallVec<[f32; MAX_CHANNELS]>;

/// A property value that supports channel-wise interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatableValue {
    Scalar(f32),
    Color(Color),
    Shadow(Shadow),
}

impl AnimatableValue {
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Color(_) => 4,
            Self::Shadow(_) => 8,
        }
    }

    /// Decompose into interpolation channels.
    pub fn channels(&self) -> Channels {
        match self {
            Self::Scalar(v) => SmallVec::from_slice(&[*v]),
            Self::Color(c) => SmallVec::from_slice(&[c.r, c.g, c.b, c.a]),
            Self::Shadow(s) => SmallVec::from_slice(&[
                s.offset_x, s.offset_y, s.blur, s.spread, s.color.r, s.color.g, s.color.b,
                s.color.a,
            ]),
        }
    }

    /// Recompose a value of the same kind as `self` from channels.
    ///
    /// `channels` must have the matching length; this is an internal
    /// invariant of the interpolator, checked in debug builds.
    pub fn with_channels(&self, channels: &[f32]) -> AnimatableValue {
        debug_assert_eq!(channels.len(), self.channel_count());
        match self {
            Self::Scalar(_) => Self::Scalar(channels[0]),
            Self::Color(_) => Self::Color(Color::rgba(
                channels[0],
                channels[1],
                channels[2],
                channels[3],
            )),
            Self::Shadow(_) => Self::Shadow(
                Shadow::new(
                    channels[0],
                    channels[1],
                    channels[2],
                    Color::rgba(channels[4], channels[5], channels[6], channels[7]),
                )
                .with_spread(channels[3]),
            ),
        }
    }

    /// Channel-wise linear interpolation. Mismatched kinds cannot blend,
    /// so the result snaps to `other`.
    pub fn lerp(&self, other: &AnimatableValue, t: f32) -> AnimatableValue {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + (b - a) * t),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, t)),
            (Self::Shadow(a), Self::Shadow(b)) => Self::Shadow(a.lerp(b, t)),
            _ => {
                debug_assert!(false, "interpolating mismatched value kinds");
                *other
            }
        }
    }

    /// The scalar payload, if this is a scalar value.
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<Shadow> {
        match self {
            Self::Shadow(s) => Some(*s),
            _ => None,
        }
    }
}

impl From<f32> for AnimatableValue {
    fn from(v: f32) -> Self {
        Self::Scalar(v)
    }
}

impl From<Color> for AnimatableValue {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl From<Shadow> for AnimatableValue {
    fn from(s: Shadow) -> Self {
        Self::Shadow(s)
    }
}
