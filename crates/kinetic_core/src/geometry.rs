//! Geometry primitives
//!
//! Minimal rect math: enough to locate a pointer relative to an element
//! and to derive how much of an element intersects its scroll viewport.

/// A point in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// An axis-aligned rectangle (origin = top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Geometric center of the rect.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }

    /// Overlapping region of two rects, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.min_x().max(other.min_x());
        let y0 = self.min_y().max(other.min_y());
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

/// Fraction of `element` visible inside `viewport`, in `[0, 1]`.
///
/// Degenerate (zero-area) elements report 0.0; the viewport trigger
/// treats that as "no measurement yet" and retries next frame.
pub fn visible_fraction(element: &Rect, viewport: &Rect) -> f32 {
    let area = element.size.area();
    if area <= 0.0 {
        return 0.0;
    }
    match element.intersection(viewport) {
        Some(overlap) => (overlap.size.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_rect() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), Point::new(60.0, 40.0));
    }

    #[test]
    fn contains_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn fully_visible_element() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert!((visible_fraction(&element, &viewport) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn half_visible_element() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        // Bottom half hangs below the viewport.
        let element = Rect::new(0.0, 550.0, 100.0, 100.0);
        assert!((visible_fraction(&element, &viewport) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn offscreen_element() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(0.0, 700.0, 100.0, 100.0);
        assert_eq!(visible_fraction(&element, &viewport), 0.0);
    }

    #[test]
    fn unmeasured_element_reports_zero() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let element = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(visible_fraction(&element, &viewport), 0.0);
    }
}
