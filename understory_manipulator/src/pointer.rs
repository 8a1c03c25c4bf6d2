// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui_events` pointer events to gesture start/move/stop.

use ui_events::pointer::{PointerButton, PointerEvent, PointerInfo};

use crate::{ManipulationController, ManipulationHost};

impl<T> ManipulationController<T> {
    /// Routes a pointer event to [`start`](Self::start), [`update`](Self::update),
    /// [`stop`](Self::stop) or [`cancel`](Self::cancel).
    ///
    /// A primary-button press hit-tests the current [`Layout`](crate::Layout)
    /// at the converted position and starts a gesture on whatever handle is
    /// under it. That pointer then owns the gesture: moves update it, release
    /// and leave stop it (keeping the last transform) and cancel undoes it.
    /// Events from any other pointer, and presses of other buttons, are
    /// ignored while the gesture runs.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_pointer_event<H: ManipulationHost>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                if e.button != Some(PointerButton::Primary) || self.is_dragging() {
                    return false;
                }
                let screen = e.state.logical_point();
                let local = host.screen_to_local(screen);
                let Some(handle) = self.layout().hit_test(local) else {
                    return false;
                };
                if !self.start(host, handle, screen) {
                    return false;
                }
                self.gesture_pointer = e.pointer.pointer_id;
                true
            }
            PointerEvent::Move(e) => {
                if !self.owns_gesture(&e.pointer) {
                    return false;
                }
                self.update(host, e.current.logical_point());
                true
            }
            PointerEvent::Up(e) => {
                let releases_primary = matches!(e.button, None | Some(PointerButton::Primary));
                if !releases_primary || !self.owns_gesture(&e.pointer) {
                    return false;
                }
                self.stop(host)
            }
            PointerEvent::Leave(info) => self.owns_gesture(info) && self.stop(host),
            PointerEvent::Cancel(info) => self.owns_gesture(info) && self.cancel(host),
            _ => false,
        }
    }

    /// Whether `pointer` may drive the active gesture.
    ///
    /// A gesture started directly through [`start`](Self::start) has no
    /// owning pointer and accepts any.
    fn owns_gesture(&self, pointer: &PointerInfo) -> bool {
        self.is_dragging()
            && (self.gesture_pointer.is_none() || self.gesture_pointer == pointer.pointer_id)
    }
}
