// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The manipulation controller: one gesture at a time, start → move* → stop.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_affine::{Decomposition, Transformation, Vector};

use crate::gesture::{adjacent_angle, scale_ratio};
use crate::{BoundingExtent, HandleId, HandleKind, Layout, LayoutDirective, ManipulatorConfig};

/// The host side of a manipulation session: coordinate conversion, change
/// notification and pointer capture.
///
/// The controller never owns the host. Each call that may need it takes it by
/// reference, in the same way `TransformEncoder::encode` takes its target.
pub trait ManipulationHost {
    /// Converts a raw pointer position into the space the transform maps into.
    fn screen_to_local(&self, screen: Point) -> Vector;

    /// Called after every transform (or extent) update.
    ///
    /// Implementations typically write `transform.to_string()` to the targets
    /// and redraw from [`ManipulationController::layout`].
    fn on_transform_changed(&mut self, transform: &Transformation, extent: &BoundingExtent);

    /// Called when a gesture starts. Hosts should route pointer release,
    /// cancel, leave and focus loss to the controller from the broadest scope
    /// available until [`ManipulationHost::release_pointer`] is called.
    fn capture_pointer(&mut self) {}

    /// Called exactly once for every [`ManipulationHost::capture_pointer`].
    fn release_pointer(&mut self) {}
}

/// Reasons a manipulation session cannot be set up (or its extent updated).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The target set was empty.
    NoTargets,
    /// The target at `index` appears earlier in the set.
    DuplicateTarget {
        /// Position of the repeated target.
        index: usize,
    },
    /// The extent has a non-finite value or a negative size.
    InvalidExtent,
    /// The initial transformation has a non-finite coefficient.
    NonFiniteTransform,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => f.write_str("argument error: zero targets"),
            Self::DuplicateTarget { index } => {
                write!(f, "argument error: target {index} is a duplicate")
            }
            Self::InvalidExtent => f.write_str("argument error: invalid bounding extent"),
            Self::NonFiniteTransform => f.write_str("argument error: non-finite transform"),
        }
    }
}

impl core::error::Error for SetupError {}

/// State captured when a gesture starts, held until it stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// The handle being dragged.
    pub handle: HandleId,
    /// The gesture performed by `handle`.
    pub kind: HandleKind,
    /// Center of the extent in the targets' local space.
    pub pivot: Vector,
    /// Transform at the start of the gesture.
    pub initial_transform: Transformation,
    /// Converted pointer position at the start of the gesture.
    pub initial_pointer: Vector,
}

impl GestureState {
    /// The transform for a pointer at `pointer`, computed from the gesture start.
    ///
    /// Results never build on intermediate moves, so there is no drift. Returns
    /// `None` when the rotation angle is undefined (pointer on the pivot).
    #[must_use]
    pub fn transform_for(&self, pointer: Vector) -> Option<Transformation> {
        let t0 = &self.initial_transform;
        let pivot = self.pivot.transform(t0);
        match self.kind {
            HandleKind::Drag => Some(t0.translate(pointer.subtract(self.initial_pointer))),
            HandleKind::Rotate => {
                let angle = adjacent_angle(self.initial_pointer, pointer, pivot).ok()?;
                Some(
                    t0.translate(pivot.opposite())
                        .rotate(angle)
                        .translate(pivot),
                )
            }
            HandleKind::ScaleDiagonal | HandleKind::ScaleHorizontal | HandleKind::ScaleVertical => {
                let ratio = scale_ratio(self.initial_pointer, pointer, pivot);
                let factors = self.kind.scale_factors(ratio)?;
                Some(
                    Transformation::IDENTITY
                        .translate(self.pivot.opposite())
                        .scale(factors)
                        .translate(self.pivot)
                        .transform(t0),
                )
            }
        }
    }
}

/// Snapshot of the controller state for debugging and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct ManipulatorDebugInfo {
    /// Number of targets in the session.
    pub target_count: usize,
    /// Current transform.
    pub transform: Transformation,
    /// Decomposition of the current transform.
    pub decomposition: Decomposition,
    /// Current bounding extent.
    pub extent: BoundingExtent,
    /// Extent queued while a gesture was active.
    pub pending_extent: Option<BoundingExtent>,
    /// The active gesture, if any.
    pub gesture: Option<GestureState>,
    /// Current configuration.
    pub config: ManipulatorConfig,
}

/// Turns pointer drags on handles into transform updates for a group of targets.
///
/// The controller exclusively owns the targets' [`Transformation`] and
/// [`BoundingExtent`]. Renderers read them (or the derived [`Layout`]) and
/// never write them.
///
/// `T` is the application's target identifier (node ID, element handle, ...).
///
/// ```
/// use kurbo::Point;
/// use understory_affine::{Transformation, Vector};
/// use understory_manipulator::{
///     BoundingExtent, HandleId, ManipulationController, ManipulationHost, ManipulatorConfig,
/// };
///
/// #[derive(Default)]
/// struct Canvas {
///     encoded: String,
/// }
///
/// impl ManipulationHost for Canvas {
///     fn screen_to_local(&self, screen: Point) -> Vector {
///         screen.into()
///     }
///     fn on_transform_changed(&mut self, t: &Transformation, _: &BoundingExtent) {
///         self.encoded = t.to_string();
///     }
/// }
///
/// let mut canvas = Canvas::default();
/// let mut controller = ManipulationController::new(
///     ["image"],
///     Transformation::IDENTITY,
///     BoundingExtent::new(0.0, 0.0, 100.0, 50.0),
///     ManipulatorConfig::default(),
/// )
/// .unwrap();
///
/// // Drag the rotate handle a quarter turn around the center (50, 25).
/// assert!(controller.start(&mut canvas, HandleId::Rotate, Point::new(100.0, 25.0)));
/// controller.update(&mut canvas, Point::new(50.0, 75.0));
/// controller.stop(&mut canvas);
///
/// let t = controller.transform();
/// assert!(Vector::new(50.0, 25.0).transform(&t).approx_eq(Vector::new(50.0, 25.0), 1e-9));
/// assert!(canvas.encoded.starts_with("matrix("));
/// ```
#[derive(Clone, Debug)]
pub struct ManipulationController<T> {
    targets: Vec<T>,
    transform: Transformation,
    extent: BoundingExtent,
    pending_extent: Option<BoundingExtent>,
    config: ManipulatorConfig,
    gesture: Option<GestureState>,
    /// Pointer that began the active gesture through the `ui_events` adapter.
    #[cfg(feature = "ui_events")]
    pub(crate) gesture_pointer: Option<ui_events::pointer::PointerId>,
}

impl<T: PartialEq> ManipulationController<T> {
    /// Starts a manipulation session over `targets`.
    ///
    /// Fails before creating any state if the target set is empty or has
    /// duplicates, if the extent is invalid, or if the transform is not finite.
    pub fn new(
        targets: impl IntoIterator<Item = T>,
        transform: Transformation,
        extent: BoundingExtent,
        config: ManipulatorConfig,
    ) -> Result<Self, SetupError> {
        let mut unique: Vec<T> = Vec::new();
        for (index, target) in targets.into_iter().enumerate() {
            if unique.contains(&target) {
                return Err(SetupError::DuplicateTarget { index });
            }
            unique.push(target);
        }
        if unique.is_empty() {
            return Err(SetupError::NoTargets);
        }
        if !extent.is_valid() {
            return Err(SetupError::InvalidExtent);
        }
        if !transform.is_finite() {
            return Err(SetupError::NonFiniteTransform);
        }
        Ok(Self {
            targets: unique,
            transform,
            extent,
            pending_extent: None,
            config,
            gesture: None,
            #[cfg(feature = "ui_events")]
            gesture_pointer: None,
        })
    }
}

impl<T> ManipulationController<T> {
    /// The targets, in the order given at setup.
    #[must_use]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> Transformation {
        self.transform
    }

    /// The current bounding extent.
    #[must_use]
    pub fn extent(&self) -> BoundingExtent {
        self.extent
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    /// Returns `true` between a successful start and the matching stop/cancel.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// The handle being dragged, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<HandleId> {
        self.gesture.map(|g| g.handle)
    }

    /// The visual layout for the current state.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::compute(&self.transform, &self.extent, &self.config)
    }

    /// Starts a gesture on `handle` at the raw pointer position `screen`.
    ///
    /// Returns `false` (and does nothing) if a gesture is already active, if
    /// the configuration disables the handle, or if the converted pointer is
    /// not finite. On success the host is asked to capture the pointer.
    pub fn start<H: ManipulationHost>(
        &mut self,
        host: &mut H,
        handle: HandleId,
        screen: Point,
    ) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let kind = handle.kind();
        if !self.config.is_enabled(kind) {
            return false;
        }
        let initial_pointer = host.screen_to_local(screen);
        if !initial_pointer.is_finite() {
            return false;
        }
        #[cfg(feature = "ui_events")]
        {
            self.gesture_pointer = None;
        }
        self.gesture = Some(GestureState {
            handle,
            kind,
            pivot: self.extent.center(),
            initial_transform: self.transform,
            initial_pointer,
        });
        host.capture_pointer();
        true
    }

    /// Moves the active gesture to the raw pointer position `screen`.
    ///
    /// Writes the new transform, notifies the host, and returns it. Returns
    /// `None` when no gesture is active or when the pointer position is
    /// degenerate for this gesture; the transform is then left unchanged.
    pub fn update<H: ManipulationHost>(
        &mut self,
        host: &mut H,
        screen: Point,
    ) -> Option<Transformation> {
        let gesture = self.gesture?;
        let pointer = host.screen_to_local(screen);
        if !pointer.is_finite() {
            return None;
        }
        let next = gesture
            .transform_for(pointer)
            .filter(Transformation::is_finite)?;
        self.transform = next;
        host.on_transform_changed(&self.transform, &self.extent);
        Some(next)
    }

    /// Ends the active gesture, keeping the last computed transform.
    ///
    /// Returns `false` if there was no gesture. Releases pointer capture and
    /// applies any extent queued during the gesture.
    pub fn stop<H: ManipulationHost>(&mut self, host: &mut H) -> bool {
        if self.gesture.take().is_none() {
            return false;
        }
        host.release_pointer();
        self.apply_pending_extent(host);
        true
    }

    /// Ends the active gesture and restores the transform it started from.
    ///
    /// Returns `false` if there was no gesture. The host is notified only if
    /// the transform actually changes back.
    pub fn cancel<H: ManipulationHost>(&mut self, host: &mut H) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        host.release_pointer();
        if self.transform != gesture.initial_transform {
            self.transform = gesture.initial_transform;
            host.on_transform_changed(&self.transform, &self.extent);
        }
        self.apply_pending_extent(host);
        true
    }

    /// Replaces the configuration and reports what the layout must redo.
    ///
    /// An active gesture keeps running even if its handle becomes disabled.
    pub fn update_config(&mut self, config: ManipulatorConfig) -> LayoutDirective {
        let directive = self.config.diff(&config);
        self.config = config;
        directive
    }

    /// Replaces the bounding extent after the targets' content changed.
    ///
    /// While a gesture is active the new extent is queued and applied when the
    /// gesture ends, so the gesture's pivot stays consistent.
    pub fn set_bounding_extent<H: ManipulationHost>(
        &mut self,
        host: &mut H,
        extent: BoundingExtent,
    ) -> Result<(), SetupError> {
        if !extent.is_valid() {
            return Err(SetupError::InvalidExtent);
        }
        if self.gesture.is_some() {
            self.pending_extent = Some(extent);
        } else if extent != self.extent {
            self.extent = extent;
            host.on_transform_changed(&self.transform, &self.extent);
        }
        Ok(())
    }

    /// Ends the session and hands the targets back.
    ///
    /// A gesture that is still active is stopped (its last transform stands)
    /// so pointer capture is always released.
    pub fn dismiss<H: ManipulationHost>(mut self, host: &mut H) -> Vec<T> {
        if self.gesture.take().is_some() {
            host.release_pointer();
        }
        self.targets
    }

    /// A snapshot of the controller state.
    #[must_use]
    pub fn debug_info(&self) -> ManipulatorDebugInfo {
        ManipulatorDebugInfo {
            target_count: self.targets.len(),
            transform: self.transform,
            decomposition: self.transform.info(),
            extent: self.extent,
            pending_extent: self.pending_extent,
            gesture: self.gesture,
            config: self.config.clone(),
        }
    }

    fn apply_pending_extent<H: ManipulationHost>(&mut self, host: &mut H) {
        if let Some(extent) = self.pending_extent.take() {
            if extent != self.extent {
                self.extent = extent;
                host.on_transform_changed(&self.transform, &self.extent);
            }
        }
    }
}
