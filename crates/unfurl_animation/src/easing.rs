//! Easing curves
//!
//! Linear and quadratic curves plus validated two-control-point cubic
//! beziers (the CSS `cubic-bezier(x1, y1, x2, y2)` form). All curves map
//! normalized progress in `[0, 1]` to an eased factor; beziers may
//! overshoot outside `[0, 1]` when their y controls do.

use crate::error::ConfigError;

/// A validated cubic bezier timing curve
///
/// The x controls must stay inside `[0, 1]` so the curve remains a function
/// of time; the y controls are unrestricted, which permits overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Create a curve, rejecting non-finite controls and out-of-range x controls
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, ConfigError> {
        for (what, value) in [
            ("bezier x1", x1),
            ("bezier y1", y1),
            ("bezier x2", x2),
            ("bezier y2", y2),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { what, value });
            }
        }
        for x in [x1, x2] {
            if !(0.0..=1.0).contains(&x) {
                return Err(ConfigError::BezierControlOutOfRange(x));
            }
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Evaluate the curve at progress `x`
    ///
    /// Solves the parametric x polynomial for `t` with Newton-Raphson, then
    /// maps the solved parameter through the y polynomial.
    pub fn eval(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let one_minus_t = 1.0 - t;
            let x_est = 3.0 * one_minus_t * one_minus_t * t * self.x1
                + 3.0 * one_minus_t * t * t * self.x2
                + t * t * t;

            let err = x_est - x;
            if err.abs() < 1e-4 {
                break;
            }

            let dx_dt = 3.0 * one_minus_t * one_minus_t * self.x1
                + 6.0 * one_minus_t * t * (self.x2 - self.x1)
                + 3.0 * t * t * (1.0 - self.x2);

            if dx_dt.abs() < 1e-6 {
                break;
            }
            t -= err / dx_dt;
        }
        let t = t.clamp(0.0, 1.0);

        let one_minus_t = 1.0 - t;
        3.0 * one_minus_t * one_minus_t * t * self.y1
            + 3.0 * one_minus_t * t * t * self.y2
            + t * t * t
    }
}

/// Easing functions applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Quadratic acceleration from rest
    EaseIn,
    /// Quadratic deceleration to rest
    EaseOut,
    /// Accelerate, then decelerate
    #[default]
    EaseInOut,
    /// Custom cubic bezier timing curve
    Bezier(CubicBezier),
}

impl Easing {
    /// Convenience constructor for a bezier easing
    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, ConfigError> {
        CubicBezier::new(x1, y1, x2, y2).map(Easing::Bezier)
    }

    /// Apply the curve to progress `t`, clamped to `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Bezier(curve) => curve.eval(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::bezier(1.0, 0.6, 0.6, 0.6).unwrap(),
        ];
        for curve in curves {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
        assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_midpoints() {
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_identity_bezier_tracks_linear() {
        // Control points on the diagonal produce the identity curve
        let curve = CubicBezier::new(0.3, 0.3, 0.7, 0.7).unwrap();
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            assert!((curve.eval(x) - x).abs() < 1e-3, "x = {x}");
        }
    }

    #[test]
    fn test_reveal_curve_monotonic() {
        // The curtain-reveal curve used by the landing page
        let curve = CubicBezier::new(1.0, 0.6, 0.6, 0.6).unwrap();
        let mut prev = 0.0;
        for i in 1..=50 {
            let y = curve.eval(i as f32 / 50.0);
            assert!(y >= prev - 1e-4, "not monotonic at step {i}: {y} < {prev}");
            prev = y;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_rejects_bad_controls() {
        assert!(matches!(
            CubicBezier::new(1.2, 0.0, 0.5, 1.0),
            Err(ConfigError::BezierControlOutOfRange(_))
        ));
        assert!(matches!(
            CubicBezier::new(0.5, 0.0, -0.1, 1.0),
            Err(ConfigError::BezierControlOutOfRange(_))
        ));
        assert!(matches!(
            CubicBezier::new(0.5, f32::NAN, 0.5, 1.0),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_overshoot_allowed() {
        // Back-out style curve: y controls outside [0, 1] are legal
        let curve = CubicBezier::new(0.34, 1.56, 0.64, 1.0).unwrap();
        let mut max = 0.0f32;
        for i in 0..=50 {
            max = max.max(curve.eval(i as f32 / 50.0));
        }
        assert!(max > 1.0);
    }
}
