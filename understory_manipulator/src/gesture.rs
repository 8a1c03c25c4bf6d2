// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure gesture math: signed angles and scale ratios around a pivot.
//!
//! ```
//! use core::f64::consts::FRAC_PI_2;
//! use understory_affine::Vector;
//! use understory_manipulator::gesture::{adjacent_angle, scale_ratio};
//!
//! let pivot = Vector::new(50.0, 25.0);
//!
//! // Dragging from the right-middle to the bottom-middle sweeps a quarter turn.
//! let angle = adjacent_angle(Vector::new(100.0, 25.0), Vector::new(50.0, 75.0), pivot).unwrap();
//! assert!((angle - FRAC_PI_2).abs() < 1e-12);
//!
//! // Moving twice as far from the pivot doubles the size.
//! assert_eq!(scale_ratio(Vector::new(0.0, 0.0), Vector::new(-50.0, -25.0), pivot), 2.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use understory_affine::{AffineError, SquareMatrix, Vector};

/// Signed angle, in radians, swept from the ray `pivot → p0` to the ray `pivot → p1`.
///
/// Think of `pivot → p0` as the hour hand and `pivot → p1` as the minute hand:
/// the result is the angle from hour to minute in the direction the hands of
/// a clock move on a y-down screen. Rotating by the result (see
/// [`Transformation::rotate`](understory_affine::Transformation::rotate))
/// about `pivot` carries the first ray onto the second.
///
/// The angle is measured in an orthonormal frame anchored at `pivot` whose
/// first axis points at `p1`. The result lies in `[-π, π]`.
///
/// Fails with [`AffineError::DivideByZero`] when `p1 == pivot`, because that
/// frame has no direction.
pub fn adjacent_angle(p0: Vector, p1: Vector, pivot: Vector) -> Result<f64, AffineError> {
    let u0 = p1.subtract(pivot).unit()?;
    let u1 = Vector::new(u0.y, -u0.x);
    let frame = SquareMatrix::from_basis(&[u0, u1])?;
    let w = p0.subtract(pivot).multiply(&frame.inverse()?)?;
    Ok(w.y.atan2(w.x))
}

/// Ratio of the distances `|pivot − p1| / |p0 − pivot|`.
///
/// Returns `1` when `p0` coincides with `pivot`, so a degenerate start never
/// produces `NaN` or an infinite scale.
#[must_use]
pub fn scale_ratio(p0: Vector, p1: Vector, pivot: Vector) -> f64 {
    let norm0 = p0.subtract(pivot).norm();
    let norm1 = pivot.subtract(p1).norm();
    if norm0 > 0.0 { norm1 / norm0 } else { 1.0 }
}
