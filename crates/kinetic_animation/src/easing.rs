//! Easing functions for tween transitions

/// Easing curve applied to normalized tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// CSS-style cubic bezier with control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The entrance curve used throughout the component catalog,
    /// equivalent to CSS `cubic-bezier(0.22, 1, 0.36, 1)`.
    pub const ENTRANCE: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// Apply the curve to a progress value in `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => solve_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Evaluate a CSS cubic bezier at progress `t`.
///
/// Solves bezier_x(p) = t for the curve parameter with Newton-Raphson,
/// falling back to bisection when the slope flattens out. Internally f64
/// so repeated per-frame evaluation stays jitter-free.
fn solve_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = f64::from(t);
    let (x1, y1, x2, y2) = (f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2));

    const TOLERANCE: f64 = 1e-7;

    let mut p = x;
    for _ in 0..8 {
        let error = curve_at(p, x1, x2) - x;
        if error.abs() < TOLERANCE {
            return curve_at(p, y1, y2) as f32;
        }
        let slope = slope_at(p, x1, x2);
        if slope.abs() < TOLERANCE {
            break;
        }
        p -= error / slope;
    }

    // Bisect over [0, 1]; the x-curve is monotone for CSS-valid control
    // points so this always converges.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..24 {
        let value = curve_at(p, x1, x2);
        if (value - x).abs() < TOLERANCE {
            break;
        }
        if value < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) / 2.0;
    }

    curve_at(p, y1, y2) as f32
}

/// One-dimensional cubic bezier through (0, p1, p2, 1), Horner form.
#[inline]
fn curve_at(t: f64, p1: f64, p2: f64) -> f64 {
    let c3 = 1.0 + 3.0 * (p1 - p2);
    let c2 = 3.0 * (p2 - 2.0 * p1);
    let c1 = 3.0 * p1;
    ((c3 * t + c2) * t + c1) * t
}

#[inline]
fn slope_at(t: f64, p1: f64, p2: f64) -> f64 {
    let c3 = 1.0 + 3.0 * (p1 - p2);
    let c2 = 3.0 * (p2 - 2.0 * p1);
    let c1 = 3.0 * p1;
    (3.0 * c3 * t + 2.0 * c2) * t + c1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::ENTRANCE,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.37), 0.37);
    }

    #[test]
    fn ease_out_leads_linear() {
        // Deceleration curves run ahead of linear mid-progress.
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!(Easing::ENTRANCE.apply(0.5) > 0.5);
    }

    #[test]
    fn bezier_matches_identity_controls() {
        // cubic-bezier(0.25, 0.25, 0.75, 0.75) lies on y = x.
        let linearish = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((linearish.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn bezier_is_monotone_in_output_bounds() {
        let mut last = 0.0;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = Easing::ENTRANCE.apply(t);
            assert!(v >= last - 1e-5);
            last = v;
        }
    }
}
