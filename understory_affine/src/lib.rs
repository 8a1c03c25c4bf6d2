// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_affine --heading-base-level=0

//! Understory Affine: a small 2D affine-transformation algebra.
//!
//! This crate provides the geometry that interactive manipulation tools are
//! built on:
//!
//! - [`Vector`]: an immutable 2D vector/point with the usual algebra.
//! - [`SquareMatrix`]: a general `N×N` matrix over basis vectors, used as a
//!   change-of-basis tool (its inverse works for any dimension).
//! - [`Transformation`]: an immutable affine map with composition, inversion,
//!   elementary builders and a closed-form [`Decomposition`].
//!
//! ## Composition order
//!
//! Points are row vectors and composition reads in application order:
//! `a.transform(&b)` means "apply `a`, then `b`". Pivot-anchored operations are
//! therefore written the way they are performed:
//!
//! ```rust
//! use understory_affine::{Transformation, Vector};
//!
//! let pivot = Vector::new(50.0, 25.0);
//! let t = Transformation::IDENTITY
//!     .translate(pivot.opposite())
//!     .scale(2.0)
//!     .translate(pivot);
//!
//! // The pivot stays put, everything else moves away from it.
//! assert_eq!(pivot.transform(&t), pivot);
//! assert_eq!(Vector::new(0.0, 0.0).transform(&t), Vector::new(-50.0, -25.0));
//! ```
//!
//! ## Encoding
//!
//! The canonical text form is the SVG/CSS `matrix(a b c d e f)` notation.
//! [`Transformation`] implements `Display` and `FromStr` for it:
//!
//! ```rust
//! use understory_affine::{Transformation, Vector};
//!
//! let t = Transformation::IDENTITY.translate(Vector::new(10.0, -2.5));
//! assert_eq!(t.to_string(), "matrix(1 0 0 1 10 -2.5)");
//! assert_eq!("matrix(1,0,0,1,10,-2.5)".parse::<Transformation>(), Ok(t));
//! ```
//!
//! ## Kurbo interop
//!
//! [`Vector`] converts to and from `kurbo::Vec2`/`kurbo::Point`, and
//! [`Transformation`] to and from `kurbo::Affine` (same coefficient order;
//! Kurbo's `*` composes right to left).
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod error;
mod square_matrix;
mod transformation;
mod vector;

pub use error::{AffineError, EncodingError};
pub use square_matrix::SquareMatrix;
pub use transformation::{Decomposition, Factors, Transformation};
pub use vector::Vector;
