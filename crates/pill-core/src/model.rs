//! Core data model for the pill canvas.
//!
//! A pill is an axis-aligned rectangle with a stable identity and a colour
//! chosen once at creation. Committed pills live in a [`PillSet`], an ordered
//! arena whose only structural edit is [`PillSet::replace_at`]: one entry out,
//! zero to two entries in, everybody else keeps their relative order.

use crate::id::PillId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Constants ───────────────────────────────────────────────────────────

/// Smallest width/height of a freshly created pill.
pub const MIN_PILL_SIZE: f64 = 40.0;

/// Smallest width/height a split may produce on the cursor side.
pub const MIN_PART_SIZE: f64 = 20.0;

/// Shift applied to a pill too small to split in either axis.
pub const NUDGE_OFFSET: f64 = 10.0;

/// Pointer travel (per axis) above which a release counts as a drag.
pub const CLICK_THRESHOLD: f64 = 5.0;

/// Corner radius used when painting pills. Presentation only.
pub const PILL_CORNER_RADIUS: f64 = 20.0;

// ─── Point ───────────────────────────────────────────────────────────────

/// Container-relative position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Colour ──────────────────────────────────────────────────────────────

/// Pastel colour: a hue with fixed saturation and lightness.
///
/// Serialized as its CSS form, `hsl(H, 75%, 70%)`, which is what hosts paint
/// with directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillColor {
    hue: u16,
}

impl PillColor {
    pub const SATURATION: u8 = 75;
    pub const LIGHTNESS: u8 = 70;

    /// Hue in degrees; wrapped into `[0, 360)`.
    pub const fn from_hue(hue: u16) -> Self {
        Self { hue: hue % 360 }
    }

    pub const fn hue(&self) -> u16 {
        self.hue
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue,
            Self::SATURATION,
            Self::LIGHTNESS
        )
    }

    /// Parse the CSS form produced by [`PillColor::to_css`].
    /// Saturation and lightness are fixed, so only the hue is read.
    pub fn from_css(css: &str) -> Option<Self> {
        let inner = css.trim().strip_prefix("hsl(")?.strip_suffix(')')?;
        let hue = inner.split(',').next()?.trim();
        let hue: u16 = hue.parse().ok()?;
        Some(Self::from_hue(hue))
    }
}

impl fmt::Debug for PillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for PillColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for PillColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PillColor::from_css(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid pill colour: {s}")))
    }
}

// ─── Pill ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pill {
    pub id: PillId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: PillColor,
}

impl Pill {
    pub fn new(id: PillId, x: f64, y: f64, width: f64, height: f64, color: PillColor) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Interior test used by splitting. A point on any edge is outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }

    /// Hit-region test used for pointer targeting. Edges count as inside.
    pub fn contains_inclusive(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Same pill, moved so that `p` sits at its centre.
    pub fn centered_on(&self, p: Point) -> Self {
        Self {
            x: p.x - self.width / 2.0,
            y: p.y - self.height / 2.0,
            ..*self
        }
    }
}

// ─── PillSet ─────────────────────────────────────────────────────────────

/// Ordered collection of committed pills. Paint order is index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillSet {
    pills: Vec<Pill>,
}

impl PillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pill: Pill) {
        self.pills.push(pill);
    }

    pub fn len(&self) -> usize {
        self.pills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pill> {
        self.pills.iter()
    }

    pub fn as_slice(&self) -> &[Pill] {
        &self.pills
    }

    pub fn get(&self, index: usize) -> Option<&Pill> {
        self.pills.get(index)
    }

    pub fn index_of(&self, id: PillId) -> Option<usize> {
        self.pills.iter().position(|p| p.id == id)
    }

    pub fn get_by_id(&self, id: PillId) -> Option<&Pill> {
        self.pills.iter().find(|p| p.id == id)
    }

    /// Move a pill without touching size, colour or identity.
    /// Returns `false` if no pill has this id.
    pub fn set_position(&mut self, id: PillId, x: f64, y: f64) -> bool {
        match self.pills.iter_mut().find(|p| p.id == id) {
            Some(pill) => {
                pill.x = x;
                pill.y = y;
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `index` and insert `replacement` in its slot.
    ///
    /// Entries before and after keep their relative order. Returns how many
    /// pills were inserted, or `None` (and leaves the set alone) when `index`
    /// is out of range.
    pub fn replace_at<I>(&mut self, index: usize, replacement: I) -> Option<usize>
    where
        I: IntoIterator<Item = Pill>,
    {
        if index >= self.pills.len() {
            return None;
        }
        let before = self.pills.len();
        self.pills.splice(index..=index, replacement);
        Some(self.pills.len() + 1 - before)
    }
}

impl<'a> IntoIterator for &'a PillSet {
    type Item = &'a Pill;
    type IntoIter = std::slice::Iter<'a, Pill>;

    fn into_iter(self) -> Self::IntoIter {
        self.pills.iter()
    }
}

impl FromIterator<Pill> for PillSet {
    fn from_iter<T: IntoIterator<Item = Pill>>(iter: T) -> Self {
        Self {
            pills: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pill(id: u64, x: f64) -> Pill {
        Pill::new(PillId::new(id), x, 0.0, 50.0, 50.0, PillColor::from_hue(0))
    }

    fn ids(set: &PillSet) -> Vec<u64> {
        set.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn strict_containment_excludes_edges() {
        let p = pill(1, 0.0);
        assert!(p.contains_strict(Point::new(25.0, 25.0)));
        assert!(!p.contains_strict(Point::new(0.0, 25.0)));
        assert!(!p.contains_strict(Point::new(50.0, 25.0)));
        assert!(!p.contains_strict(Point::new(25.0, 0.0)));
        assert!(!p.contains_strict(Point::new(25.0, 50.0)));
    }

    #[test]
    fn inclusive_containment_includes_edges() {
        let p = pill(1, 0.0);
        assert!(p.contains_inclusive(Point::new(0.0, 0.0)));
        assert!(p.contains_inclusive(Point::new(50.0, 50.0)));
        assert!(!p.contains_inclusive(Point::new(50.1, 25.0)));
    }

    #[test]
    fn centered_on_keeps_size_and_identity() {
        let p = pill(3, 0.0).centered_on(Point::new(100.0, 100.0));
        assert_eq!(p.x, 75.0);
        assert_eq!(p.y, 75.0);
        assert_eq!(p.width, 50.0);
        assert_eq!(p.id, PillId::new(3));
    }

    #[test]
    fn replace_at_with_two_keeps_order() {
        let mut set: PillSet = [pill(1, 0.0), pill(2, 100.0), pill(3, 200.0)]
            .into_iter()
            .collect();
        let inserted = set.replace_at(1, [pill(10, 100.0), pill(11, 125.0)]);
        assert_eq!(inserted, Some(2));
        assert_eq!(ids(&set), vec![1, 10, 11, 3]);
    }

    #[test]
    fn replace_at_with_one_and_zero() {
        let mut set: PillSet = [pill(1, 0.0), pill(2, 100.0)].into_iter().collect();
        assert_eq!(set.replace_at(0, [pill(5, 10.0)]), Some(1));
        assert_eq!(ids(&set), vec![5, 2]);
        assert_eq!(set.replace_at(1, std::iter::empty()), Some(0));
        assert_eq!(ids(&set), vec![5]);
    }

    #[test]
    fn replace_at_out_of_range_is_noop() {
        let mut set: PillSet = [pill(1, 0.0)].into_iter().collect();
        assert_eq!(set.replace_at(4, [pill(9, 0.0)]), None);
        assert_eq!(ids(&set), vec![1]);
    }

    #[test]
    fn set_position_moves_only_position() {
        let mut set: PillSet = [pill(1, 0.0)].into_iter().collect();
        assert!(set.set_position(PillId::new(1), 7.0, 8.0));
        let p = set.get(0).unwrap();
        assert_eq!((p.x, p.y, p.width, p.height), (7.0, 8.0, 50.0, 50.0));
        assert!(!set.set_position(PillId::new(99), 0.0, 0.0));
    }

    #[test]
    fn color_css_roundtrip() {
        let c = PillColor::from_hue(215);
        assert_eq!(c.to_css(), "hsl(215, 75%, 70%)");
        assert_eq!(PillColor::from_css(&c.to_css()), Some(c));
        assert_eq!(PillColor::from_css("rgb(1, 2, 3)"), None);
    }

    #[test]
    fn color_hue_wraps() {
        assert_eq!(PillColor::from_hue(400).hue(), 40);
    }

    #[test]
    fn pill_json_uses_css_color() {
        let json = serde_json::to_value(pill(4, 1.0)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["color"], "hsl(0, 75%, 70%)");
    }
}
