//! Hit testing: point → pill lookup.
//!
//! Walks pills in reverse paint order so the topmost one wins. Edges count
//! as part of a pill's hit region, unlike split containment.

use pill_core::{Pill, PillId, Point};

/// Find the topmost pill at position (px, py).
/// Returns `None` if the point is over empty canvas.
pub fn hit_test(pills: &[Pill], px: f64, py: f64) -> Option<PillId> {
    let p = Point::new(px, py);
    pills
        .iter()
        .rev()
        .find(|pill| pill.contains_inclusive(p))
        .map(|pill| pill.id)
}

/// All pills whose interior contains the point, in paint order.
pub fn hit_test_all(pills: &[Pill], px: f64, py: f64) -> Vec<PillId> {
    let p = Point::new(px, py);
    pills
        .iter()
        .filter(|pill| pill.contains_strict(p))
        .map(|pill| pill.id)
        .collect()
}
