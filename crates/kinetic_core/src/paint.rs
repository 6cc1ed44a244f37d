//! Paint types
//!
//! Colors and shadows are the two non-scalar animatable values. Both
//! interpolate channel-wise (RGBA components, shadow offsets/blur/
//! spread), never as strings.

/// RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a 24-bit hex value, e.g. `0x3b82f6`.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Component-wise linear interpolation toward `other`.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Drop-shadow description.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
        }
    }

    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    /// Interpolate every numeric component plus the color channels.
    pub fn lerp(&self, other: &Shadow, t: f32) -> Shadow {
        Shadow {
            offset_x: self.offset_x + (other.offset_x - self.offset_x) * t,
            offset_y: self.offset_y + (other.offset_y - self.offset_y) * t,
            blur: self.blur + (other.blur - self.blur) * t,
            spread: self.spread + (other.spread - self.spread) * t,
            color: self.color.lerp(&other.color, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lerp_midpoint() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < f32::EPSILON);
        assert!((mid.g - 0.5).abs() < f32::EPSILON);
        assert!((mid.b - 0.5).abs() < f32::EPSILON);
        assert!((mid.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn color_from_hex() {
        let blue = Color::from_hex(0x3b82f6);
        assert!((blue.r - 59.0 / 255.0).abs() < 1e-6);
        assert!((blue.g - 130.0 / 255.0).abs() < 1e-6);
        assert!((blue.b - 246.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn shadow_lerp_is_channel_wise() {
        let rest = Shadow::new(0.0, 2.0, 8.0, Color::rgba(0.0, 0.0, 0.0, 0.08));
        let lifted = Shadow::new(0.0, 20.0, 40.0, Color::rgba(0.0, 0.0, 0.0, 0.12));
        let mid = rest.lerp(&lifted, 0.5);
        assert!((mid.offset_y - 11.0).abs() < 1e-6);
        assert!((mid.blur - 24.0).abs() < 1e-6);
        assert!((mid.color.a - 0.10).abs() < 1e-6);
    }
}
