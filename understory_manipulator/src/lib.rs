// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_manipulator --heading-base-level=0

//! Understory Manipulator: headless move/rotate/resize handles.
//!
//! A [`ManipulationController`] owns the [`Transformation`](understory_affine::Transformation)
//! and [`BoundingExtent`] of a group of targets and turns pointer drags on its
//! handles into transform updates:
//!
//! - the **dragger** (a rectangle over the targets) pans them,
//! - the **rotate handle** (above the top edge, at the end of a neck) rotates
//!   them about the center of the extent,
//! - the eight **scale handles** (corners and edge midpoints) scale them about
//!   the same center, uniformly or along one axis.
//!
//! Each gesture runs start → move* → stop (or cancel). Every move is computed
//! from the state captured at start, so long drags do not drift.
//!
//! The crate draws nothing. [`Layout`] tells a renderer where the handles and
//! the guide path go, and [`ManipulationHost`] is how the controller reaches
//! the application: pointer conversion, change notifications and pointer
//! capture.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_affine::{Transformation, Vector};
//! use understory_manipulator::{
//!     BoundingExtent, HandleId, ManipulationController, ManipulationHost, ManipulatorConfig,
//! };
//!
//! struct Scene {
//!     transform: String,
//! }
//!
//! impl ManipulationHost for Scene {
//!     fn screen_to_local(&self, screen: Point) -> Vector {
//!         screen.into()
//!     }
//!     fn on_transform_changed(&mut self, t: &Transformation, _: &BoundingExtent) {
//!         self.transform = t.to_string();
//!     }
//! }
//!
//! let mut scene = Scene { transform: String::new() };
//! let mut controller = ManipulationController::new(
//!     [7_u32],
//!     Transformation::IDENTITY,
//!     BoundingExtent::new(0.0, 0.0, 100.0, 50.0),
//!     ManipulatorConfig::default(),
//! )
//! .unwrap();
//!
//! // Press on the bottom-right corner and drag away from the center.
//! let corner = controller.layout().hit_test(Vector::new(100.0, 50.0));
//! assert_eq!(corner, Some(HandleId::BottomRight));
//! controller.start(&mut scene, HandleId::BottomRight, Point::new(100.0, 50.0));
//! controller.update(&mut scene, Point::new(150.0, 75.0));
//! controller.stop(&mut scene);
//!
//! assert_eq!(scene.transform, "matrix(2 0 0 2 -50 -25)");
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library float functions.
//! - `libm`: use `libm` for `no_std` builds.
//! - `ui_events` (default): [`ManipulationController::handle_pointer_event`]
//!   for `ui_events::pointer::PointerEvent` streams.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod extent;
pub mod gesture;
mod handle;
mod layout;
#[cfg(feature = "ui_events")]
mod pointer;

pub use config::{LayoutDirective, ManipulatorConfig};
pub use controller::{
    GestureState, ManipulationController, ManipulationHost, ManipulatorDebugInfo, SetupError,
};
pub use extent::BoundingExtent;
pub use handle::{HandleId, HandleKind};
pub use layout::{DraggerPlacement, HandlePlacement, Layout};
