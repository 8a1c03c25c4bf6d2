// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! General `N×N` matrices built from basis vectors.
//!
//! [`SquareMatrix`] is a change-of-basis tool: its rows are basis vectors, and
//! multiplying a row vector by the inverse of the matrix expresses that vector
//! in the basis. Unlike [`Transformation`](crate::Transformation), the inverse
//! is computed by Gauss–Jordan elimination and works for any dimension.
//!
//! ```
//! use understory_affine::{SquareMatrix, Vector};
//!
//! // A basis rotated 90° clockwise from the standard one.
//! let basis = SquareMatrix::from_basis(&[Vector::new(0.0, 1.0), Vector::new(1.0, 0.0)]).unwrap();
//! let coords = Vector::new(3.0, 4.0).multiply(&basis.inverse().unwrap()).unwrap();
//! assert_eq!(coords, Vector::new(4.0, 3.0));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::{AffineError, Vector};

/// Relative magnitude below which a pivot is treated as zero.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A square matrix stored as `N` row (basis) vectors of dimension `N`.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    /// Row-major entries, `dim * dim` long.
    entries: Vec<f64>,
}

impl SquareMatrix {
    /// Builds a matrix from `N` rows of `N` values each.
    ///
    /// Fails with [`AffineError::DimensionMismatch`] when a row's length differs
    /// from the number of rows.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, AffineError> {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(AffineError::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }
        Ok(Self { dim, entries })
    }

    /// Builds a 2×2 matrix whose rows are the given basis vectors.
    pub fn from_basis(basis: &[Vector]) -> Result<Self, AffineError> {
        if basis.len() != 2 {
            return Err(AffineError::DimensionMismatch {
                expected: 2,
                found: basis.len(),
            });
        }
        Ok(Self {
            dim: 2,
            entries: vec![basis[0].x, basis[0].y, basis[1].x, basis[1].y],
        })
    }

    /// The `dim × dim` identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut entries = vec![0.0; dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = 1.0;
        }
        Self { dim, entries }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The `i`-th row (basis vector), or `None` if `i` is out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.dim {
            return None;
        }
        self.entries.get(i * self.dim..(i + 1) * self.dim)
    }

    /// The entry at row `i`, column `j`, or `None` if either is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.dim || j >= self.dim {
            return None;
        }
        self.entries.get(i * self.dim + j).copied()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.dim + j]
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Result<Self, AffineError> {
        if other.dim != self.dim {
            return Err(AffineError::DimensionMismatch {
                expected: self.dim,
                found: other.dim,
            });
        }
        let n = self.dim;
        let mut entries = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                entries[i * n + j] = (0..n).map(|k| self.at(i, k) * other.at(k, j)).sum();
            }
        }
        Ok(Self { dim: n, entries })
    }

    /// Row-vector product `row · self`.
    pub fn multiply_row(&self, row: &[f64]) -> Result<Vec<f64>, AffineError> {
        if row.len() != self.dim {
            return Err(AffineError::DimensionMismatch {
                expected: self.dim,
                found: row.len(),
            });
        }
        Ok((0..self.dim)
            .map(|j| row.iter().enumerate().map(|(k, v)| v * self.at(k, j)).sum())
            .collect())
    }

    /// Determinant, computed by elimination with partial pivoting.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let n = self.dim;
        let mut m = self.entries.clone();
        let mut det = 1.0;
        for col in 0..n {
            let pivot = pivot_row(&m, n, col);
            if m[pivot * n + col] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                swap_rows(&mut m, n, pivot, col);
                det = -det;
            }
            let p = m[col * n + col];
            det *= p;
            for r in col + 1..n {
                let factor = m[r * n + col] / p;
                for c in col..n {
                    m[r * n + c] -= factor * m[col * n + c];
                }
            }
        }
        det
    }

    /// General inverse by Gauss–Jordan elimination.
    ///
    /// Fails with [`AffineError::SingularMatrix`] when a pivot vanishes relative
    /// to the largest entry of the matrix.
    pub fn inverse(&self) -> Result<Self, AffineError> {
        let n = self.dim;
        let scale = self.entries.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if scale == 0.0 && n > 0 {
            return Err(AffineError::SingularMatrix);
        }
        let threshold = SINGULAR_EPSILON * scale;

        let mut m = self.entries.clone();
        let mut inv = Self::identity(n).entries;
        for col in 0..n {
            let pivot = pivot_row(&m, n, col);
            if m[pivot * n + col].abs() <= threshold {
                return Err(AffineError::SingularMatrix);
            }
            swap_rows(&mut m, n, pivot, col);
            swap_rows(&mut inv, n, pivot, col);

            let p = m[col * n + col];
            for c in 0..n {
                m[col * n + c] /= p;
                inv[col * n + c] /= p;
            }
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = m[r * n + col];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..n {
                    m[r * n + c] -= factor * m[col * n + c];
                    inv[r * n + c] -= factor * inv[col * n + c];
                }
            }
        }
        Ok(Self {
            dim: n,
            entries: inv,
        })
    }

    /// Returns `true` if every entry is within `tolerance` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.dim == other.dim
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// Index of the row at or below `col` with the largest magnitude in column `col`.
fn pivot_row(m: &[f64], n: usize, col: usize) -> usize {
    (col..n)
        .max_by(|&a, &b| m[a * n + col].abs().total_cmp(&m[b * n + col].abs()))
        .unwrap_or(col)
}

fn swap_rows(m: &mut [f64], n: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    for c in 0..n {
        m.swap(a * n + c, b * n + c);
    }
}
