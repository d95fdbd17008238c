//! Split geometry: point → how one pill is replaced.
//!
//! A click inside a pill cuts it along the cursor's vertical line when the
//! pill is wide enough, otherwise along the horizontal line when it is tall
//! enough. A pill too small in both axes can't be cut and is nudged aside
//! instead, keeping its identity.
//!
//! Only the cursor-side part (left/top) is clamped to the part floor. The
//! far part takes whatever width remains and may end up below the floor when
//! the click lands close to the far edge.

use crate::config::SessionConfig;
use crate::id::{IdAllocator, PillId};
use crate::model::{Pill, PillSet, Point};
use smallvec::{SmallVec, smallvec};

/// Replacement for one pill hit by a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitOutcome {
    /// Cut into two parts with fresh ids: left/right or top/bottom.
    TwoParts([Pill; 2]),
    /// Too small to cut; same id, shifted by the nudge offset.
    Nudged(Pill),
}

impl SplitOutcome {
    pub fn into_pills(self) -> SmallVec<[Pill; 2]> {
        match self {
            SplitOutcome::TwoParts([a, b]) => smallvec![a, b],
            SplitOutcome::Nudged(p) => smallvec![p],
        }
    }
}

/// Tally of what a click did to the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub split: usize,
    pub nudged: usize,
}

impl SplitReport {
    pub fn changed(&self) -> bool {
        self.split + self.nudged > 0
    }
}

pub fn can_split_vertically(pill: &Pill, x: f64, min_part: f64) -> bool {
    pill.width >= 2.0 * min_part && x > pill.x && x < pill.right()
}

pub fn can_split_horizontally(pill: &Pill, y: f64, min_part: f64) -> bool {
    pill.height >= 2.0 * min_part && y > pill.y && y < pill.bottom()
}

/// Decide how `pill` is replaced when clicked at `point`.
///
/// `point` must lie strictly inside `pill`; [`split_all`] filters for that.
/// `allocate` is called twice for a split and never for a nudge.
pub fn evaluate_split<F>(
    pill: &Pill,
    point: Point,
    config: &SessionConfig,
    mut allocate: F,
) -> SplitOutcome
where
    F: FnMut() -> PillId,
{
    let min_part = config.min_part_size;

    if can_split_vertically(pill, point.x, min_part) {
        let left_width = min_part.max(point.x - pill.x);
        let right_width = pill.width - left_width;
        let left = Pill {
            id: allocate(),
            width: left_width,
            ..*pill
        };
        let right = Pill {
            id: allocate(),
            x: pill.x + left_width,
            width: right_width,
            ..*pill
        };
        return SplitOutcome::TwoParts([left, right]);
    }

    if can_split_horizontally(pill, point.y, min_part) {
        let top_height = min_part.max(point.y - pill.y);
        let bottom_height = pill.height - top_height;
        let top = Pill {
            id: allocate(),
            height: top_height,
            ..*pill
        };
        let bottom = Pill {
            id: allocate(),
            y: pill.y + top_height,
            height: bottom_height,
            ..*pill
        };
        return SplitOutcome::TwoParts([top, bottom]);
    }

    let mut nudged = *pill;
    if pill.width < 2.0 * min_part {
        nudged.x += config.nudge_offset;
    } else {
        nudged.y += config.nudge_offset;
    }
    SplitOutcome::Nudged(nudged)
}

/// Apply a click at `point` to every pill whose interior contains it.
///
/// Each hit pill is replaced in place by its outcome; pills that don't
/// contain the point are left untouched and keep their order. Outputs of a
/// replacement are not re-examined.
pub fn split_all(
    pills: &mut PillSet,
    point: Point,
    config: &SessionConfig,
    ids: &mut IdAllocator,
) -> SplitReport {
    let mut report = SplitReport::default();
    let mut i = 0;
    while let Some(pill) = pills.get(i).copied() {
        if !pill.contains_strict(point) {
            i += 1;
            continue;
        }
        let outcome = evaluate_split(&pill, point, config, || ids.next());
        match &outcome {
            SplitOutcome::TwoParts([a, b]) => {
                log::debug!(
                    "split {} at ({}, {}) into {} ({}x{}) + {} ({}x{})",
                    pill.id,
                    point.x,
                    point.y,
                    a.id,
                    a.width,
                    a.height,
                    b.id,
                    b.width,
                    b.height
                );
                report.split += 1;
            }
            SplitOutcome::Nudged(p) => {
                log::debug!("nudged {} to ({}, {})", p.id, p.x, p.y);
                report.nudged += 1;
            }
        }
        let inserted = pills.replace_at(i, outcome.into_pills()).unwrap_or(1);
        i += inserted;
    }
    report
}
