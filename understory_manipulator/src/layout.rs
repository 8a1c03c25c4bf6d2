// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle, dragger and guide-path placement.
//!
//! [`Layout::compute`] is a pure function of the current transform, extent and
//! configuration. Renderers call it (usually through
//! [`ManipulationController::layout`](crate::ManipulationController::layout))
//! after every change and redraw from scratch.

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Rect, Shape};
use understory_affine::{Transformation, Vector};

use crate::{BoundingExtent, HandleId, ManipulatorConfig};

/// Where a round handle is drawn, in the same space as the transform's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePlacement {
    /// Which handle this is.
    pub id: HandleId,
    /// Center of the handle.
    pub position: Vector,
    /// Whether the handle is shown (and hit-testable).
    pub visible: bool,
}

/// The dragger: a transparent `width × height` rectangle carrying the target transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggerPlacement {
    /// Transform from the targets' local space.
    pub transform: Transformation,
    /// Width of the rectangle, in local units.
    pub width: f64,
    /// Height of the rectangle, in local units.
    pub height: f64,
    /// Whether the dragger is active.
    pub visible: bool,
}

/// Complete visual layout of the manipulator.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The dragger rectangle.
    pub dragger: DraggerPlacement,
    /// The rotate handle followed by the eight scale handles, in drawing order.
    pub handles: Vec<HandlePlacement>,
    /// Outline of the extent, plus the neck up to the rotate handle when rotatable.
    pub guide: BezPath,
    /// Radius used to draw and hit-test the handles.
    pub handle_radius: f64,
}

impl Layout {
    /// Lays out the manipulator for the given state.
    ///
    /// The rotate handle sits `config.neck_length` above the top edge after
    /// scaling, so the local-space neck is divided by the vertical scale. A
    /// collapsed vertical scale falls back to the unscaled length.
    #[must_use]
    pub fn compute(
        transform: &Transformation,
        extent: &BoundingExtent,
        config: &ManipulatorConfig,
    ) -> Self {
        let scale_y = transform.info().scale_y;
        let neck = if scale_y > 0.0 {
            config.neck_length / scale_y
        } else {
            config.neck_length
        };
        let place = |id: HandleId| {
            id.local_anchor(extent, neck)
                .unwrap_or_default()
                .transform(transform)
        };

        let handles = core::iter::once(HandleId::Rotate)
            .chain(HandleId::SCALE)
            .map(|id| HandlePlacement {
                id,
                position: place(id),
                visible: config.is_enabled(id.kind()),
            })
            .collect();

        let mut guide = BezPath::new();
        guide.move_to(place(HandleId::Top));
        for corner in [
            HandleId::TopLeft,
            HandleId::BottomLeft,
            HandleId::BottomRight,
            HandleId::TopRight,
            HandleId::Top,
        ] {
            guide.line_to(place(corner));
        }
        if config.rotatable {
            guide.line_to(place(HandleId::Rotate));
        }

        Self {
            dragger: DraggerPlacement {
                transform: *transform,
                width: extent.width,
                height: extent.height,
                visible: config.draggable,
            },
            handles,
            guide,
            handle_radius: config.handle_radius,
        }
    }

    /// The placement of `id`, or `None` for the dragger.
    #[must_use]
    pub fn handle(&self, id: HandleId) -> Option<&HandlePlacement> {
        self.handles.iter().find(|h| h.id == id)
    }

    /// The topmost visible handle under `point`.
    ///
    /// Handles are tested in reverse drawing order, then the dragger
    /// rectangle. A dragger whose transform cannot be inverted is never hit.
    #[must_use]
    pub fn hit_test(&self, point: Vector) -> Option<HandleId> {
        let pt = kurbo::Point::from(point);
        if let Some(handle) = self
            .handles
            .iter()
            .rev()
            .filter(|h| h.visible)
            .find(|h| Circle::new(h.position, self.handle_radius).contains(pt))
        {
            return Some(handle.id);
        }

        if !self.dragger.visible {
            return None;
        }
        let local = point.transform(&self.dragger.transform.inverse().ok()?);
        let bounds = Rect::new(0.0, 0.0, self.dragger.width, self.dragger.height);
        let inside = local.x >= bounds.x0
            && local.x <= bounds.x1
            && local.y >= bounds.y0
            && local.y <= bounds.y1;
        inside.then_some(HandleId::Dragger)
    }
}
