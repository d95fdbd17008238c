//! Gesture state for the canvas.
//!
//! ```text
//! Idle -> Creating        (pointer down on empty canvas)
//! Idle -> DraggingPill    (pointer down on a pill; captures move/up)
//!
//! Creating -> Idle        (pointer up: provisional pill is committed)
//! DraggingPill -> Idle    (pointer up: capture released, maybe a click-split)
//! ```

use pill_core::{Pill, PillId, Point};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,

    /// A pill is being drawn. Its top-left stays at `anchor`.
    Creating { provisional: Pill, anchor: Point },

    /// A committed pill follows the pointer until release.
    DraggingPill { id: PillId, anchor: Point },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn provisional(&self) -> Option<&Pill> {
        match self {
            Gesture::Creating { provisional, .. } => Some(provisional),
            _ => None,
        }
    }

    /// The pill holding pointer capture, if any.
    pub fn captured(&self) -> Option<PillId> {
        match self {
            Gesture::DraggingPill { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Where the active gesture started.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Gesture::Idle => None,
            Gesture::Creating { anchor, .. } | Gesture::DraggingPill { anchor, .. } => {
                Some(*anchor)
            }
        }
    }
}
