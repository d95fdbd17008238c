//! Canvas session: the single owner of all interaction state.
//!
//! The host feeds pointer events in delivery order (down, zero or more
//! moves, up) and reads back a [`Frame`] to paint. Everything that mutates
//! pills goes through here:
//!
//! - **Create**: down on empty canvas starts a provisional pill at the
//!   pointer, moves grow it (never below the creation floor), up commits it.
//! - **Drag**: down on a pill captures the pointer for that pill; moves keep
//!   the pill centred under the pointer until release.
//! - **Click-split**: an up that isn't a create, and that stayed within the
//!   click threshold of its down point, splits every pill under the cursor.

use crate::frame::Frame;
use crate::gesture::Gesture;
use crate::input::{HitTarget, InputEvent};
use pill_core::split::{SplitReport, split_all};
use pill_core::{ColorSource, IdAllocator, Pill, PillId, PillSet, Point, SessionConfig};

/// What a pointer-up did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpOutcome {
    /// The provisional pill was committed.
    Committed(PillId),
    /// Treated as a click; the report says which pills were hit.
    Split(SplitReport),
    /// Travelled past the click threshold; nothing to split.
    DragEnded,
}

impl UpOutcome {
    pub fn changed(&self) -> bool {
        match self {
            UpOutcome::Committed(_) => true,
            UpOutcome::Split(report) => report.changed(),
            UpOutcome::DragEnded => false,
        }
    }
}

pub struct Session {
    pills: PillSet,
    gesture: Gesture,
    cursor: Point,
    ids: IdAllocator,
    palette: Box<dyn ColorSource>,
    config: SessionConfig,
}

impl Session {
    /// New empty canvas with default tuning.
    pub fn new(palette: impl ColorSource + 'static) -> Self {
        Self {
            pills: PillSet::new(),
            gesture: Gesture::Idle,
            cursor: Point::default(),
            ids: IdAllocator::new(),
            palette: Box::new(palette),
            config: SessionConfig::default(),
        }
    }

    /// # Errors
    /// Returns the validation message if `config` is unusable.
    pub fn with_config(
        config: SessionConfig,
        palette: impl ColorSource + 'static,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(palette)
        })
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn pills(&self) -> &PillSet {
        &self.pills
    }

    pub fn provisional(&self) -> Option<&Pill> {
        self.gesture.provisional()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Committed pills followed by the provisional one, plus the cursor.
    pub fn frame(&self) -> Frame {
        let mut pills: Vec<Pill> = self.pills.iter().copied().collect();
        let provisional = self.gesture.provisional().copied();
        if let Some(p) = provisional {
            pills.push(p);
        }
        Frame {
            pills,
            cursor: self.cursor,
            provisional: provisional.map(|p| p.id),
        }
    }

    // ─── Event handling ──────────────────────────────────────────────────

    /// Dispatch a normalized event. Returns `true` if the frame changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y, target } => self.pointer_down(x, y, target),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y).changed(),
        }
    }

    /// Returns `true` if the frame changed.
    pub fn pointer_down(&mut self, x: f64, y: f64, target: HitTarget) -> bool {
        if !self.gesture.is_idle() {
            log::warn!("pointer down during {:?}; discarding it", self.gesture);
            self.gesture = Gesture::Idle;
        }

        let anchor = Point::new(x, y);
        match target {
            HitTarget::Canvas => {
                let size = self.config.min_pill_size;
                let provisional = Pill::new(
                    self.ids.next(),
                    x,
                    y,
                    size,
                    size,
                    self.palette.next_color(),
                );
                log::debug!("creating {} at ({x}, {y})", provisional.id);
                self.gesture = Gesture::Creating {
                    provisional,
                    anchor,
                };
                true
            }
            HitTarget::Pill(id) => {
                if self.pills.get_by_id(id).is_none() {
                    log::warn!("pointer down on unknown pill {id}; ignoring");
                    return false;
                }
                log::debug!("capturing {id} at ({x}, {y})");
                self.gesture = Gesture::DraggingPill { id, anchor };
                false
            }
        }
    }

    /// Returns `true` if the frame changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let p = Point::new(x, y);
        let cursor_moved = self.cursor != p;
        self.cursor = p;

        if let Some(id) = self.gesture.captured() {
            return self.drag_pill(id, x, y) || cursor_moved;
        }

        let min = self.config.min_pill_size;
        match &mut self.gesture {
            Gesture::Creating {
                provisional,
                anchor,
            } => {
                provisional.width = min.max(x - anchor.x);
                provisional.height = min.max(y - anchor.y);
                log::trace!(
                    "resizing {} to {}x{}",
                    provisional.id,
                    provisional.width,
                    provisional.height
                );
                true
            }
            Gesture::Idle | Gesture::DraggingPill { .. } => cursor_moved,
        }
    }

    /// Finish the current gesture. Capture is always released.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> UpOutcome {
        let release = Point::new(x, y);
        self.cursor = release;
        let anchor = self.gesture.anchor();

        match std::mem::take(&mut self.gesture) {
            Gesture::Creating { provisional, .. } => {
                log::debug!(
                    "committed {} ({}x{} at {}, {})",
                    provisional.id,
                    provisional.width,
                    provisional.height,
                    provisional.x,
                    provisional.y
                );
                self.pills.push(provisional);
                return UpOutcome::Committed(provisional.id);
            }
            Gesture::DraggingPill { id, .. } => {
                log::debug!("released {id} at ({x}, {y})");
            }
            Gesture::Idle => {}
        }

        if self.exceeds_click_threshold(anchor, release) {
            return UpOutcome::DragEnded;
        }
        UpOutcome::Split(self.click_split(self.cursor))
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Split (or nudge) every committed pill whose interior contains `point`.
    pub fn click_split(&mut self, point: Point) -> SplitReport {
        let report = split_all(&mut self.pills, point, &self.config, &mut self.ids);
        if report.changed() {
            log::debug!(
                "click at ({}, {}): {} split, {} nudged",
                point.x,
                point.y,
                report.split,
                report.nudged
            );
        }
        report
    }

    /// Centre pill `id` on the pointer. Size, colour and id are untouched and
    /// the position isn't clamped to the container.
    pub fn drag_pill(&mut self, id: PillId, x: f64, y: f64) -> bool {
        let Some(pill) = self.pills.get_by_id(id) else {
            log::warn!("drag of unknown pill {id}");
            return false;
        };
        let moved = pill.centered_on(Point::new(x, y));
        if moved.x == pill.x && moved.y == pill.y {
            return false;
        }
        log::trace!("dragging {id} to ({}, {})", moved.x, moved.y);
        self.pills.set_position(id, moved.x, moved.y)
    }

    /// No recorded anchor counts as a click.
    fn exceeds_click_threshold(&self, anchor: Option<Point>, release: Point) -> bool {
        let threshold = self.config.click_threshold;
        anchor.is_some_and(|a| {
            (release.x - a.x).abs() > threshold || (release.y - a.y).abs() > threshold
        })
    }
}
