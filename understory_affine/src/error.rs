// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the affine algebra.

use core::fmt;

/// Errors produced by vector, matrix and transformation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffineError {
    /// Basis vectors or operands do not have the dimension the operation needs.
    DimensionMismatch {
        /// The dimension the operation required.
        expected: usize,
        /// The dimension that was supplied.
        found: usize,
    },
    /// The matrix (or transformation) has a zero determinant and cannot be inverted.
    SingularMatrix,
    /// A vector of zero length was normalized.
    DivideByZero,
    /// A `matrix(a b c d e f)` string could not be decoded.
    InvalidEncoding(EncodingError),
}

impl fmt::Display for AffineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Self::SingularMatrix => f.write_str("matrix is singular and has no inverse"),
            Self::DivideByZero => f.write_str("cannot normalize a zero-length vector"),
            Self::InvalidEncoding(err) => write!(f, "invalid transform encoding: {err}"),
        }
    }
}

impl core::error::Error for AffineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EncodingError> for AffineError {
    fn from(err: EncodingError) -> Self {
        Self::InvalidEncoding(err)
    }
}

/// Reasons a `matrix(a b c d e f)` string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// The string does not start with `matrix(`.
    MissingPrefix,
    /// The closing parenthesis is missing or followed by trailing content.
    UnbalancedParens,
    /// The matrix did not hold exactly six values.
    WrongArity {
        /// How many values were found.
        found: usize,
    },
    /// The value at `index` is not a number.
    InvalidNumber {
        /// Zero-based position of the value among `a b c d e f`.
        index: usize,
    },
    /// The value at `index` parsed, but is infinite or NaN.
    NonFinite {
        /// Zero-based position of the value among `a b c d e f`.
        index: usize,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => f.write_str("expected `matrix(`"),
            Self::UnbalancedParens => f.write_str("expected a single closing `)`"),
            Self::WrongArity { found } => write!(f, "expected 6 values, found {found}"),
            Self::InvalidNumber { index } => write!(f, "value {index} is not a number"),
            Self::NonFinite { index } => write!(f, "value {index} is not finite"),
        }
    }
}

impl core::error::Error for EncodingError {}
