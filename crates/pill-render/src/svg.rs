//! SVG export of a canvas frame.
//!
//! Pills are painted in order as rounded rectangles with a thin black
//! border, followed by the two guide lines through the cursor.

use crate::theme::Theme;
use pill_core::{PILL_CORNER_RADIUS, Pill, Point};
use std::fmt::Write;

/// Corner radius for a pill, limited so small pills stay well-formed.
pub fn corner_radius(pill: &Pill) -> f64 {
    PILL_CORNER_RADIUS.min(pill.width / 2.0).min(pill.height / 2.0)
}

/// Render pills (and guide lines, when a cursor is given) as an SVG document.
pub fn render_svg(
    pills: &[Pill],
    cursor: Option<Point>,
    width: f64,
    height: f64,
    theme: &Theme,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
        theme.background
    );

    for pill in pills {
        let _ = writeln!(
            out,
            r#"  <rect data-id="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            pill.id.get(),
            pill.x,
            pill.y,
            pill.width,
            pill.height,
            corner_radius(pill),
            pill.color.to_css(),
            theme.border
        );
    }

    if let Some(c) = cursor {
        let _ = writeln!(
            out,
            r#"  <line x1="{x}" y1="0" x2="{x}" y2="{height}" stroke="{}" stroke-width="1"/>"#,
            theme.guide,
            x = c.x
        );
        let _ = writeln!(
            out,
            r#"  <line x1="0" y1="{y}" x2="{width}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
            theme.guide,
            y = c.y
        );
    }

    out.push_str("</svg>\n");
    log::trace!("rendered {} pills to svg ({} bytes)", pills.len(), out.len());
    out
}
