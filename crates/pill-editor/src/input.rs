//! Input abstraction layer.
//!
//! Normalizes host pointer events into a unified `InputEvent` enum consumed
//! by the session. Coordinates are container-relative.

use pill_core::PillId;

/// What the pointer landed on when it went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas: starts a new pill.
    Canvas,
    /// An existing pill's hit region: starts dragging that pill.
    Pill(PillId),
}

impl From<Option<PillId>> for HitTarget {
    fn from(hit: Option<PillId>) -> Self {
        hit.map_or(HitTarget::Canvas, HitTarget::Pill)
    }
}

/// A normalized input event from a pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64, target: HitTarget },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64, target: HitTarget) -> Self {
        Self::PointerDown { x, y, target }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }
}
