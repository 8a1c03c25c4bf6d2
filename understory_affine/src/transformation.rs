// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable 2D affine transformations.
//!
//! A [`Transformation`] is the matrix
//!
//! ```text
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! ```
//!
//! stored as its three basis vectors `(a, b)`, `(c, d)` and `(e, f)`. Points are
//! treated as row vectors, so `(x, y, 1) · M` maps `(x, y)` to
//! `(a x + c y + e, b x + d y + f)`.
//!
//! Composition reads left to right: `x.transform(&y)` applies `x` first, then
//! `y`. The elementary builders ([`Transformation::translate`],
//! [`Transformation::rotate`], [`Transformation::scale`],
//! [`Transformation::skew`]) all compose onto `self` this way, so chains read
//! in application order:
//!
//! ```
//! use core::f64::consts::FRAC_PI_2;
//! use understory_affine::{Transformation, Vector};
//!
//! // Rotate 90° about the origin, then move 10 to the right.
//! let t = Transformation::IDENTITY.rotate(FRAC_PI_2).translate(Vector::new(10.0, 0.0));
//! let p = Vector::new(1.0, 0.0).transform(&t);
//! assert!(p.approx_eq(Vector::new(10.0, 1.0), 1e-12));
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{AffineError, EncodingError, Vector};

const DEGREES_PER_RADIAN: f64 = 180.0 / core::f64::consts::PI;

/// Scale or skew amounts: one value for both axes, or one per axis.
///
/// Most callers pass an `f64` or a [`Vector`] and let `Into` pick the variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factors {
    /// The same amount on both axes.
    Uniform(f64),
    /// Separate amounts for the horizontal (`x`) and vertical (`y`) axes.
    PerAxis(Vector),
}

impl Factors {
    /// The `(x, y)` amounts.
    #[must_use]
    pub fn xy(self) -> (f64, f64) {
        match self {
            Self::Uniform(v) => (v, v),
            Self::PerAxis(v) => (v.x, v.y),
        }
    }
}

impl From<f64> for Factors {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vector> for Factors {
    fn from(value: Vector) -> Self {
        Self::PerAxis(value)
    }
}

/// Closed-form decomposition of a [`Transformation`].
///
/// Angles are in degrees. The decomposition does not separate shear from
/// rotation: `rotation` is always equal to `skew_x`. It is meant for display
/// and layout and cannot rebuild a skewed matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposition {
    /// `e`
    pub translate_x: f64,
    /// `f`
    pub translate_y: f64,
    /// Length of the first basis vector, `√(a² + b²)`.
    pub scale_x: f64,
    /// Length of the second basis vector, `√(c² + d²)`.
    pub scale_y: f64,
    /// `atan2(d, c) − 90°`
    pub skew_x: f64,
    /// `atan2(b, a)`
    pub skew_y: f64,
    /// Same as `skew_x`.
    pub rotation: f64,
}

/// An immutable 2D affine map.
///
/// Every operation returns a new value; operands are never modified.
/// [`Default`] is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    /// `(a, b)`: image of the unit x vector.
    x_axis: Vector,
    /// `(c, d)`: image of the unit y vector.
    y_axis: Vector,
    /// `(e, f)`: image of the origin.
    origin: Vector,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformation {
    /// The identity transformation.
    pub const IDENTITY: Self = Self::from_basis(
        Vector::new(1.0, 0.0),
        Vector::new(0.0, 1.0),
        Vector::new(0.0, 0.0),
    );

    /// The identity transformation.
    #[must_use]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Builds a transformation from its three basis vectors `(a, b)`, `(c, d)`, `(e, f)`.
    #[must_use]
    pub const fn from_basis(x_axis: Vector, y_axis: Vector, origin: Vector) -> Self {
        Self {
            x_axis,
            y_axis,
            origin,
        }
    }

    /// Builds a transformation from `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn from_coefficients([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self::from_basis(Vector::new(a, b), Vector::new(c, d), Vector::new(e, f))
    }

    /// The coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 6] {
        [
            self.x_axis.x,
            self.x_axis.y,
            self.y_axis.x,
            self.y_axis.y,
            self.origin.x,
            self.origin.y,
        ]
    }

    /// The basis vectors `[(a, b), (c, d), (e, f)]`.
    #[must_use]
    pub const fn basis(&self) -> [Vector; 3] {
        [self.x_axis, self.y_axis, self.origin]
    }

    /// `ad − bc`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.x_axis.x * self.y_axis.y - self.x_axis.y * self.y_axis.x
    }

    /// Composes `self` with `other`: the result applies `self`, then `other`.
    ///
    /// In matrix terms this is the row-vector product `self · other`.
    #[must_use]
    pub fn transform(&self, other: &Self) -> Self {
        Self::from_basis(
            other.apply_linear(self.x_axis),
            other.apply_linear(self.y_axis),
            self.origin.transform(other),
        )
    }

    /// The inverse map.
    ///
    /// Fails with [`AffineError::SingularMatrix`] when the linear part has a
    /// vanishing determinant (an axis scaled to zero).
    pub fn inverse(&self) -> Result<Self, AffineError> {
        let det = self.determinant();
        let [a, b, c, d, e, f] = self.coefficients();
        let magnitude = a * a + b * b + c * c + d * d;
        if det.is_nan() || det.abs() <= f64::EPSILON * magnitude {
            return Err(AffineError::SingularMatrix);
        }
        let (ia, ib, ic, id) = (d / det, -b / det, -c / det, a / det);
        Ok(Self::from_coefficients([
            ia,
            ib,
            ic,
            id,
            -(e * ia + f * ic),
            -(e * ib + f * id),
        ]))
    }

    /// Composes a translation by `v` onto `self`.
    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        self.transform(&Self::from_coefficients([1.0, 0.0, 0.0, 1.0, v.x, v.y]))
    }

    /// Composes a rotation by `radians` about the origin onto `self`.
    ///
    /// The elementary matrix has basis vectors `(cos, sin)` and `(−sin, cos)`.
    #[must_use]
    pub fn rotate(&self, radians: f64) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        self.transform(&Self::from_coefficients([cos, sin, -sin, cos, 0.0, 0.0]))
    }

    /// Composes a scale about the origin onto `self`.
    ///
    /// Accepts a uniform factor (`f64`) or per-axis factors ([`Vector`]).
    #[must_use]
    pub fn scale(&self, factors: impl Into<Factors>) -> Self {
        let (sx, sy) = factors.into().xy();
        self.transform(&Self::from_coefficients([sx, 0.0, 0.0, sy, 0.0, 0.0]))
    }

    /// Composes a skew onto `self`; angles are in radians.
    ///
    /// The `x` angle shears along the horizontal axis (`c = tan x`) and the `y`
    /// angle along the vertical axis (`b = tan y`).
    #[must_use]
    pub fn skew(&self, angles: impl Into<Factors>) -> Self {
        let (x, y) = angles.into().xy();
        self.transform(&Self::from_coefficients([1.0, y.tan(), x.tan(), 1.0, 0.0, 0.0]))
    }

    /// Decomposes the matrix into translation, scale, skew and rotation.
    ///
    /// See [`Decomposition`] for the formulas and their limits.
    #[must_use]
    pub fn info(&self) -> Decomposition {
        let [a, b, c, d, e, f] = self.coefficients();
        let skew_x = d.atan2(c) * DEGREES_PER_RADIAN - 90.0;
        let skew_y = b.atan2(a) * DEGREES_PER_RADIAN;
        Decomposition {
            translate_x: e,
            translate_y: f,
            scale_x: (a * a + b * b).sqrt(),
            scale_y: (c * c + d * d).sqrt(),
            skew_x,
            skew_y,
            rotation: skew_x,
        }
    }

    /// Returns `true` if every coefficient is within `tolerance` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.coefficients()
            .iter()
            .zip(other.coefficients())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coefficients().iter().all(|v| v.is_finite())
    }

    /// Applies only the linear part (no translation) to `v`.
    fn apply_linear(&self, v: Vector) -> Vector {
        Vector::new(
            self.x_axis.x * v.x + self.y_axis.x * v.y,
            self.x_axis.y * v.x + self.y_axis.y * v.y,
        )
    }
}

/// Encodes as `matrix(a b c d e f)`.
impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.coefficients().map(positive_zero);
        write!(f, "matrix({a} {b} {c} {d} {e} {g})")
    }
}

/// Decodes `matrix(a b c d e f)`.
///
/// Values may be separated by whitespace, commas, or both, and whitespace is
/// allowed around the parentheses.
impl FromStr for Transformation {
    type Err = AffineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix("matrix")
            .ok_or(EncodingError::MissingPrefix)?
            .trim_start()
            .strip_prefix('(')
            .ok_or(EncodingError::MissingPrefix)?;
        let body = rest
            .strip_suffix(')')
            .filter(|body| !body.contains(['(', ')']))
            .ok_or(EncodingError::UnbalancedParens)?;

        let mut values = [0.0; 6];
        let mut count = 0;
        for token in body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            if count < values.len() {
                let value: f64 = token
                    .parse()
                    .map_err(|_| EncodingError::InvalidNumber { index: count })?;
                if !value.is_finite() {
                    return Err(EncodingError::NonFinite { index: count }.into());
                }
                values[count] = value;
            }
            count += 1;
        }
        if count != values.len() {
            return Err(EncodingError::WrongArity { found: count }.into());
        }
        Ok(Self::from_coefficients(values))
    }
}

/// Maps `-0.0` to `0.0` so the encoding never contains `-0`.
fn positive_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

impl From<kurbo::Affine> for Transformation {
    fn from(affine: kurbo::Affine) -> Self {
        Self::from_coefficients(affine.as_coeffs())
    }
}

/// Kurbo's `Affine` uses the same `[a, b, c, d, e, f]` order. Note that Kurbo
/// composes right to left: `x.transform(&y)` corresponds to `Y * X`.
impl From<Transformation> for kurbo::Affine {
    fn from(t: Transformation) -> Self {
        Self::new(t.coefficients())
    }
}
