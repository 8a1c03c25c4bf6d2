// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture sessions for `understory_manipulator`.
//!
//! These drive the controller the way an application would: hit-test the
//! layout, start on whatever is under the pointer, move, and stop, while a
//! host stores the encoded transform the way a rendering surface would.

use kurbo::Point;
use understory_affine::{Transformation, Vector};
use understory_manipulator::{
    BoundingExtent, HandleId, LayoutDirective, ManipulationController, ManipulationHost,
    ManipulatorConfig,
};

const TOLERANCE: f64 = 1e-9;

/// A surface that stores the transform as its `matrix(...)` attribute.
///
/// Screen space is the surface space scaled by `zoom`.
struct Surface {
    zoom: f64,
    attribute: String,
    notifications: usize,
    captured: bool,
}

impl Surface {
    fn new(zoom: f64) -> Self {
        Self {
            zoom,
            attribute: Transformation::IDENTITY.to_string(),
            notifications: 0,
            captured: false,
        }
    }

    fn stored(&self) -> Transformation {
        self.attribute.parse().unwrap()
    }
}

impl ManipulationHost for Surface {
    fn screen_to_local(&self, screen: Point) -> Vector {
        Vector::from(screen).scale(1.0 / self.zoom)
    }

    fn on_transform_changed(&mut self, transform: &Transformation, _: &BoundingExtent) {
        self.attribute = transform.to_string();
        self.notifications += 1;
    }

    fn capture_pointer(&mut self) {
        assert!(!self.captured, "capture without release");
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        assert!(self.captured, "release without capture");
        self.captured = false;
    }
}

fn session() -> ManipulationController<&'static str> {
    ManipulationController::new(
        ["photo", "caption"],
        Transformation::IDENTITY,
        BoundingExtent::new(0.0, 0.0, 100.0, 50.0),
        ManipulatorConfig::default(),
    )
    .unwrap()
}

/// Hit-tests at `local`, then starts on the handle found there.
fn press(
    controller: &mut ManipulationController<&'static str>,
    surface: &mut Surface,
    local: Vector,
) -> Option<HandleId> {
    let handle = controller.layout().hit_test(local)?;
    let screen = Point::from(local.scale(surface.zoom));
    controller.start(surface, handle, screen).then_some(handle)
}

fn drag_to(
    controller: &mut ManipulationController<&'static str>,
    surface: &mut Surface,
    local: Vector,
) {
    let screen = Point::from(local.scale(surface.zoom));
    controller.update(surface, screen);
}

#[test]
fn diagonal_scale_about_the_center() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();

    assert_eq!(
        press(&mut controller, &mut surface, Vector::new(0.0, 0.0)),
        Some(HandleId::TopLeft)
    );
    drag_to(&mut controller, &mut surface, Vector::new(-50.0, -25.0));
    assert!(controller.stop(&mut surface));

    let t = surface.stored();
    let pivot = Vector::new(50.0, 25.0);
    assert!(pivot.transform(&t).approx_eq(pivot, TOLERANCE));
    let info = t.info();
    assert!((info.scale_x - 2.0).abs() < TOLERANCE);
    assert!((info.scale_y - 2.0).abs() < TOLERANCE);
    assert_eq!(surface.attribute, "matrix(2 0 0 2 -50 -25)");
}

#[test]
fn rotate_a_quarter_turn_about_the_center() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();

    assert_eq!(
        press(&mut controller, &mut surface, Vector::new(50.0, -30.0)),
        Some(HandleId::Rotate)
    );
    // Drag the handle from straight above the center to straight right of it.
    drag_to(&mut controller, &mut surface, Vector::new(105.0, 25.0));
    controller.stop(&mut surface);

    let t = surface.stored();
    assert!(
        Vector::new(50.0, 25.0)
            .transform(&t)
            .approx_eq(Vector::new(50.0, 25.0), TOLERANCE)
    );
    assert!(
        Vector::new(100.0, 25.0)
            .transform(&t)
            .approx_eq(Vector::new(50.0, 75.0), TOLERANCE)
    );

    // The rotate handle now sits to the right of the center, one neck away.
    let handle = controller.layout().handle(HandleId::Rotate).unwrap().position;
    assert!(handle.approx_eq(Vector::new(105.0, 25.0), TOLERANCE));
}

#[test]
fn screen_points_are_converted_to_local_space() {
    let mut surface = Surface::new(2.0);
    let mut controller = session();

    assert_eq!(
        press(&mut controller, &mut surface, Vector::new(40.0, 20.0)),
        Some(HandleId::Dragger)
    );
    drag_to(&mut controller, &mut surface, Vector::new(50.0, 30.0));
    controller.stop(&mut surface);

    assert!(
        surface
            .stored()
            .approx_eq(&Transformation::IDENTITY.translate(Vector::new(10.0, 10.0)), TOLERANCE)
    );
}

#[test]
fn consecutive_gestures_compose() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();

    // Pan by (100, 0).
    press(&mut controller, &mut surface, Vector::new(50.0, 25.0));
    drag_to(&mut controller, &mut surface, Vector::new(150.0, 25.0));
    controller.stop(&mut surface);

    // Then widen twice from the right edge, now at (200, 25).
    assert_eq!(
        press(&mut controller, &mut surface, Vector::new(200.0, 25.0)),
        Some(HandleId::Right)
    );
    drag_to(&mut controller, &mut surface, Vector::new(250.0, 25.0));
    controller.stop(&mut surface);

    let t = surface.stored();
    // The center (now at (150, 25)) stays put; the left edge moves out to 50.
    assert!(
        Vector::new(50.0, 25.0)
            .transform(&t)
            .approx_eq(Vector::new(150.0, 25.0), TOLERANCE)
    );
    assert!(
        Vector::new(0.0, 25.0)
            .transform(&t)
            .approx_eq(Vector::new(50.0, 25.0), TOLERANCE)
    );
    assert!((t.info().scale_y - 1.0).abs() < TOLERANCE);
}

#[test]
fn aspect_lock_hides_and_blocks_edge_handles() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();

    let directive =
        controller.update_config(ManipulatorConfig::default().with_aspect_ratio_locked(true));
    assert_eq!(directive, LayoutDirective::SCALE_HANDLES);

    // The right edge handle is gone, so the press lands on the dragger.
    assert_eq!(
        press(&mut controller, &mut surface, Vector::new(99.0, 25.0)),
        Some(HandleId::Dragger)
    );
    controller.stop(&mut surface);
    assert!(!controller.start(&mut surface, HandleId::Right, Point::new(100.0, 25.0)));
}

#[test]
fn cancel_puts_the_attribute_back() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();

    press(&mut controller, &mut surface, Vector::new(100.0, 50.0));
    drag_to(&mut controller, &mut surface, Vector::new(300.0, 150.0));
    assert_ne!(surface.stored(), Transformation::IDENTITY);

    assert!(controller.cancel(&mut surface));
    assert_eq!(surface.stored(), Transformation::IDENTITY);
    assert!(!surface.captured);
}

#[test]
fn dismiss_mid_gesture_releases_the_pointer() {
    let mut surface = Surface::new(1.0);
    let mut controller = session();
    press(&mut controller, &mut surface, Vector::new(50.0, 25.0));
    assert!(surface.captured);

    let targets = controller.dismiss(&mut surface);
    assert_eq!(targets, ["photo", "caption"]);
    assert!(!surface.captured);
}

#[test]
fn resumes_from_a_stored_attribute() {
    let mut surface = Surface::new(1.0);
    surface.attribute = String::from("matrix(1, 0, 0, 1, 20, 30)");

    let mut controller = ManipulationController::new(
        ["photo"],
        surface.stored(),
        BoundingExtent::new(0.0, 0.0, 10.0, 10.0),
        ManipulatorConfig::default(),
    )
    .unwrap();

    controller.start(&mut surface, HandleId::Dragger, Point::new(25.0, 35.0));
    controller.update(&mut surface, Point::new(30.0, 35.0));
    controller.stop(&mut surface);
    assert_eq!(surface.attribute, "matrix(1 0 0 1 25 30)");
    assert_eq!(surface.notifications, 1);
}
