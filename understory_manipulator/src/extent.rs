// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use understory_affine::Vector;

/// Axis-aligned bounding box of the manipulated targets, in their local space.
///
/// Handle anchors and the gesture pivot are measured from the local origin:
/// the corners are `(0, 0)` and `(width, height)` and the pivot is
/// `(width / 2, height / 2)`. `x` and `y` report where the content's own box
/// starts and are carried for the rendering side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingExtent {
    /// Left edge of the content box.
    pub x: f64,
    /// Top edge of the content box.
    pub y: f64,
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl BoundingExtent {
    /// Creates an extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The point held fixed by rotate and scale gestures: `(width / 2, height / 2)`.
    #[must_use]
    pub fn center(&self) -> Vector {
        Vector::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `true` if all values are finite and the size is not negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl From<Rect> for BoundingExtent {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<BoundingExtent> for Rect {
    fn from(extent: BoundingExtent) -> Self {
        Self::new(
            extent.x,
            extent.y,
            extent.x + extent.width,
            extent.y + extent.height,
        )
    }
}
