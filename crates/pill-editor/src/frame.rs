//! Render contract handed to the presentation layer.

use pill_core::{Pill, PillId, Point};
use pill_render::svg::render_svg;
use pill_render::theme::Theme;
use serde::Serialize;

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Committed pills in paint order, then the provisional pill if any.
    pub pills: Vec<Pill>,
    /// Crosshair guide position.
    pub cursor: Point,
    /// Id of the trailing provisional pill, when one is being drawn.
    pub provisional: Option<PillId>,
}

impl Frame {
    /// # Errors
    /// Returns the serializer message if encoding fails.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("frame serialization error: {e}"))
    }

    pub fn to_svg(&self, width: f64, height: f64, theme: &Theme) -> String {
        render_svg(&self.pills, Some(self.cursor), width, height, theme)
    }
}
