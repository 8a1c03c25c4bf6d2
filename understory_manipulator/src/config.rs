// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manipulator configuration and the layout directives its changes produce.

use alloc::string::String;

use crate::HandleKind;

bitflags::bitflags! {
    /// Which parts of the handle layout a configuration change invalidated.
    ///
    /// Returned by [`ManipulatorConfig::diff`] and
    /// [`ManipulationController::update_config`](crate::ManipulationController::update_config).
    /// An empty directive means nothing needs to be redrawn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LayoutDirective: u8 {
        /// Stroke color/width or handle radius changed.
        const STYLE         = 0b0000_0001;
        /// The guide path must be rebuilt.
        const GUIDE         = 0b0000_0010;
        /// Dragger visibility changed.
        const DRAGGER       = 0b0000_0100;
        /// Rotate handle position or visibility changed.
        const ROTATE_HANDLE = 0b0000_1000;
        /// Scale handle visibility changed.
        const SCALE_HANDLES = 0b0001_0000;
    }
}

/// Appearance and capabilities of the manipulator.
///
/// This is a plain value: replace it wholesale through
/// [`ManipulationController::update_config`](crate::ManipulationController::update_config).
/// It never changes the geometry of a gesture; it only decides which handles
/// are shown and may start one.
#[derive(Clone, Debug, PartialEq)]
pub struct ManipulatorConfig {
    /// Length of the neck between the top edge and the rotate handle, in
    /// on-screen units (it is divided by the vertical scale when laid out).
    pub neck_length: f64,
    /// Stroke color of the guide path and handles, as a CSS/SVG color string.
    pub stroke_color: String,
    /// Stroke width of the guide path and handles.
    pub stroke_width: f64,
    /// Radius of the round handles; also their hit radius.
    pub handle_radius: f64,
    /// Whether the dragger can pan the targets.
    pub draggable: bool,
    /// Whether the scale handles are shown.
    pub resizable: bool,
    /// Whether scaling is restricted to the diagonal (uniform) handles.
    pub aspect_ratio_locked: bool,
    /// Whether the rotate handle is shown.
    pub rotatable: bool,
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self {
            neck_length: 30.0,
            stroke_color: String::from("black"),
            stroke_width: 2.0,
            handle_radius: 10.0,
            draggable: true,
            resizable: true,
            aspect_ratio_locked: false,
            rotatable: true,
        }
    }
}

impl ManipulatorConfig {
    /// Sets the neck length.
    #[must_use]
    pub fn with_neck_length(mut self, neck_length: f64) -> Self {
        self.neck_length = neck_length;
        self
    }

    /// Sets the stroke color.
    #[must_use]
    pub fn with_stroke_color(mut self, stroke_color: impl Into<String>) -> Self {
        self.stroke_color = stroke_color.into();
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the handle radius.
    #[must_use]
    pub fn with_handle_radius(mut self, handle_radius: f64) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    /// Enables or disables the dragger.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Enables or disables the scale handles.
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Locks or unlocks the aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio_locked(mut self, locked: bool) -> Self {
        self.aspect_ratio_locked = locked;
        self
    }

    /// Enables or disables the rotate handle.
    #[must_use]
    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    /// Whether handles of `kind` are shown and may start a gesture.
    ///
    /// With the aspect ratio locked only the diagonal handles scale, since the
    /// edge handles always change a single axis.
    #[must_use]
    pub fn is_enabled(&self, kind: HandleKind) -> bool {
        match kind {
            HandleKind::Drag => self.draggable,
            HandleKind::Rotate => self.rotatable,
            HandleKind::ScaleDiagonal => self.resizable,
            HandleKind::ScaleHorizontal | HandleKind::ScaleVertical => {
                self.resizable && !self.aspect_ratio_locked
            }
        }
    }

    /// The layout work needed to go from `self` to `next`.
    #[must_use]
    pub fn diff(&self, next: &Self) -> LayoutDirective {
        let mut directive = LayoutDirective::empty();
        if self.stroke_color != next.stroke_color
            || self.stroke_width != next.stroke_width
            || self.handle_radius != next.handle_radius
        {
            directive |= LayoutDirective::STYLE;
        }
        if self.neck_length != next.neck_length || self.rotatable != next.rotatable {
            directive |= LayoutDirective::GUIDE | LayoutDirective::ROTATE_HANDLE;
        }
        if self.draggable != next.draggable {
            directive |= LayoutDirective::DRAGGER;
        }
        if self.resizable != next.resizable || self.aspect_ratio_locked != next.aspect_ratio_locked
        {
            directive |= LayoutDirective::SCALE_HANDLES;
        }
        directive
    }
}
