// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-dimensional vectors and points.

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{AffineError, SquareMatrix, Transformation};

/// A 2D vector, also used as a point.
///
/// `Vector` is an immutable value: every operation returns a new vector.
/// Points are vectors measured from the origin; there is no separate point type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[allow(
        clippy::should_implement_trait,
        reason = "named counterpart of the `Add` impl below"
    )]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// The vector pointing the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Multiplies both components by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// The vector of length 1 with the same direction.
    ///
    /// Fails with [`AffineError::DivideByZero`] for the zero vector.
    pub fn unit(self) -> Result<Self, AffineError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(AffineError::DivideByZero);
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Row-vector product `self · matrix`.
    ///
    /// The matrix must be 2×2; any other dimension is a
    /// [`AffineError::DimensionMismatch`].
    pub fn multiply(self, matrix: &SquareMatrix) -> Result<Self, AffineError> {
        let row = matrix.multiply_row(&[self.x, self.y])?;
        Ok(Self::new(row[0], row[1]))
    }

    /// Applies an affine transformation: `(x, y, 1) · M`.
    #[must_use]
    pub fn transform(self, t: &Transformation) -> Self {
        let [a, b, c, d, e, f] = t.coefficients();
        Self::new(a * self.x + c * self.y + e, b * self.x + d * self.y + f)
    }

    /// Returns `true` if both components are within `tolerance` of `other`'s.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl From<kurbo::Vec2> for Vector {
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Point> for Vector {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector> for kurbo::Vec2 {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for kurbo::Point {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
