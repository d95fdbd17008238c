//! Canvas2D software renderer.
//!
//! Draws a [`Frame`] to an HTML `<canvas>` via `CanvasRenderingContext2d`:
//! background, pills in paint order, then the crosshair guide lines.

use pill_editor::Frame;
use pill_render::svg::corner_radius;
use pill_render::theme::Theme;
use web_sys::CanvasRenderingContext2d;

pub fn render_frame(
    ctx: &CanvasRenderingContext2d,
    frame: &Frame,
    canvas_width: f64,
    canvas_height: f64,
    theme: &Theme,
) {
    ctx.set_fill_style_str(theme.background);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    for pill in &frame.pills {
        ctx.save();
        rounded_rect_path(
            ctx,
            pill.x,
            pill.y,
            pill.width,
            pill.height,
            corner_radius(pill),
        );
        ctx.set_fill_style_str(&pill.color.to_css());
        ctx.fill();
        ctx.set_stroke_style_str(theme.border);
        ctx.set_line_width(1.0);
        ctx.stroke();
        ctx.restore();
    }

    draw_guides(ctx, frame.cursor.x, frame.cursor.y, canvas_width, canvas_height, theme);
}

/// Vertical and horizontal 1px lines through the cursor, over everything.
fn draw_guides(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    theme: &Theme,
) {
    ctx.save();
    ctx.set_fill_style_str(theme.guide);
    ctx.fill_rect(x, 0.0, 1.0, height);
    ctx.fill_rect(0.0, y, width, 1.0);
    ctx.restore();
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.arc_to(x + w, y, x + w, y + r, r).unwrap_or(());
    ctx.line_to(x + w, y + h - r);
    ctx.arc_to(x + w, y + h, x + w - r, y + h, r).unwrap_or(());
    ctx.line_to(x + r, y + h);
    ctx.arc_to(x, y + h, x, y + h - r, r).unwrap_or(());
    ctx.line_to(x, y + r);
    ctx.arc_to(x, y, x + r, y, r).unwrap_or(());
    ctx.close_path();
}
