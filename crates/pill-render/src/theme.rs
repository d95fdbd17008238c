//! Light and dark palettes for everything that isn't a pill.

/// Colours shared by the SVG exporter and the Canvas2D painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub border: &'static str,
    pub guide: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: "#F3F4F6",
            border: "#000000",
            guide: "#6B7280",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1C1C1E",
            border: "#E5E5EA",
            guide: "#98989D",
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }
}
