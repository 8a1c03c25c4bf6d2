// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle identities, kinds and local anchors.

use understory_affine::Vector;

use crate::BoundingExtent;

/// What a gesture on a handle does to the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Pan the targets (the dragger covering the targets).
    Drag,
    /// Rotate about the pivot.
    Rotate,
    /// Scale both axes by the same ratio about the pivot.
    ScaleDiagonal,
    /// Scale only the horizontal axis about the pivot.
    ScaleHorizontal,
    /// Scale only the vertical axis about the pivot.
    ScaleVertical,
}

impl HandleKind {
    /// Per-axis scale factors for a distance `ratio`, or `None` for non-scale kinds.
    #[must_use]
    pub fn scale_factors(self, ratio: f64) -> Option<Vector> {
        match self {
            Self::ScaleDiagonal => Some(Vector::new(ratio, ratio)),
            Self::ScaleHorizontal => Some(Vector::new(ratio, 1.0)),
            Self::ScaleVertical => Some(Vector::new(1.0, ratio)),
            Self::Drag | Self::Rotate => None,
        }
    }

    /// Returns `true` for the three scale kinds.
    #[must_use]
    pub fn is_scale(self) -> bool {
        self.scale_factors(1.0).is_some()
    }
}

/// One specific interactive control.
///
/// There is one dragger, one rotate handle and eight scale handles: the four
/// corners scale diagonally, the left/right edge midpoints horizontally and the
/// top/bottom edge midpoints vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// The transparent rectangle over the targets.
    Dragger,
    /// The knob at the end of the neck above the top edge.
    Rotate,
    /// Corner at `(0, 0)`.
    TopLeft,
    /// Corner at `(width, 0)`.
    TopRight,
    /// Corner at `(0, height)`.
    BottomLeft,
    /// Corner at `(width, height)`.
    BottomRight,
    /// Edge midpoint at `(width, height / 2)`.
    Right,
    /// Edge midpoint at `(0, height / 2)`.
    Left,
    /// Edge midpoint at `(width / 2, 0)`.
    Top,
    /// Edge midpoint at `(width / 2, height)`.
    Bottom,
}

impl HandleId {
    /// The eight scale handles: diagonal, then horizontal, then vertical.
    pub const SCALE: [Self; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    /// The gesture this handle performs.
    #[must_use]
    pub fn kind(self) -> HandleKind {
        match self {
            Self::Dragger => HandleKind::Drag,
            Self::Rotate => HandleKind::Rotate,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight => {
                HandleKind::ScaleDiagonal
            }
            Self::Right | Self::Left => HandleKind::ScaleHorizontal,
            Self::Top | Self::Bottom => HandleKind::ScaleVertical,
        }
    }

    /// Where the handle sits in the targets' local space, before the transform.
    ///
    /// `neck` is the local-space distance of the rotate handle above the top
    /// edge. The dragger covers the whole extent and has no anchor point.
    #[must_use]
    pub fn local_anchor(self, extent: &BoundingExtent, neck: f64) -> Option<Vector> {
        let (w, h) = (extent.width, extent.height);
        let anchor = match self {
            Self::Dragger => return None,
            Self::Rotate => Vector::new(w / 2.0, -neck),
            Self::TopLeft => Vector::new(0.0, 0.0),
            Self::TopRight => Vector::new(w, 0.0),
            Self::BottomLeft => Vector::new(0.0, h),
            Self::BottomRight => Vector::new(w, h),
            Self::Right => Vector::new(w, h / 2.0),
            Self::Left => Vector::new(0.0, h / 2.0),
            Self::Top => Vector::new(w / 2.0, 0.0),
            Self::Bottom => Vector::new(w / 2.0, h),
        };
        Some(anchor)
    }
}
