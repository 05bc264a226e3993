//! Scalar math utilities
//!
//! Re-exports glam alongside the handful of interpolation helpers the
//! instrument drawing code leans on.

pub use glam::*;

/// Tolerance below which a discriminant counts as zero.
pub const ROUND_ERROR: f64 = 1e-10;

#[inline]
pub fn pow2(x: f64) -> f64 {
    x * x
}

#[inline]
pub fn pow3(x: f64) -> f64 {
    x * x * x
}

/// Weighted average; `w` runs from 0.0 (all of `x`) to 1.0 (all of `y`).
#[inline]
pub fn wavg(x: f64, y: f64, w: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&w), "weight {w} outside [0, 1]");
    x + (y - x) * w
}

/// How far between `min_val` and `max_val` the value `x` lies, as a
/// fraction. With `clamp` the result is limited to [0, 1].
///
/// ```text
///    1 -------------------+
///      |               /  |
/// f(x) ------------+      |
///      |         / |      |
///    0 ------+     |      |
///         min_val  x   max_val
/// ```
#[inline]
pub fn iter_fract(x: f64, min_val: f64, max_val: f64, clamp: bool) -> f64 {
    debug_assert!(max_val > min_val, "empty range {min_val}..{max_val}");
    let fract = (x - min_val) / (max_val - min_val);
    if clamp {
        fract.clamp(0.0, 1.0)
    } else {
        fract
    }
}

/// Value at `x` of the line through (`x1`, `y1`) and (`x2`, `y2`).
/// Extrapolates outside the two points.
#[inline]
pub fn fx_lin(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x - x1) / (x2 - x1) * (y2 - y1) + y1
}

/// Real roots of `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    None,
    One(f64),
    Two(f64, f64),
}

impl QuadraticRoots {
    pub fn count(&self) -> usize {
        match self {
            QuadraticRoots::None => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(..) => 2,
        }
    }
}

/// Solve `a*x^2 + b*x + c = 0` over the reals.
///
/// With `a == 0` this degenerates to the linear equation; a discriminant
/// within [`ROUND_ERROR`] of zero yields a single (double) root.
pub fn quadratic_solve(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if a == 0.0 {
        if b == 0.0 {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }

    let disc = pow2(b) - 4.0 * a * c;
    if disc > ROUND_ERROR {
        let root = disc.sqrt();
        QuadraticRoots::Two((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    } else if disc > -ROUND_ERROR {
        QuadraticRoots::One(-b / (2.0 * a))
    } else {
        QuadraticRoots::None
    }
}
