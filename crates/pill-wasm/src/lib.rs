//! WASM bridge for Pill Split — exposes the canvas session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards
//! container-relative pointer coordinates; hit testing happens here so the
//! page never has to know where pills are.

mod render2d;

use pill_core::{PastelPalette, SessionConfig};
use pill_editor::{HitTarget, InputEvent, Session, UpOutcome};
use pill_render::hit::{hit_test, hit_test_all};
use pill_render::theme::Theme;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
#[wasm_bindgen]
pub struct PillCanvas {
    session: Session,
    width: f64,
    height: f64,
    /// Dark mode flag — `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl PillCanvas {
    /// Create a canvas with default tuning and a randomly seeded palette.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self::from_session(Session::new(PastelPalette::from_entropy()), width, height)
    }

    /// Create a canvas with a fixed palette seed (reproducible colours).
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Self {
        console_error_panic_hook_setup();
        Self::from_session(
            Session::new(PastelPalette::from_seed(u64::from(seed))),
            width,
            height,
        )
    }

    /// Create a canvas from a JSON config such as `{"nudgeOffset": 8}`.
    pub fn with_config(width: f64, height: f64, config_json: &str) -> Result<PillCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = SessionConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        let session = Session::with_config(config, PastelPalette::from_entropy())
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_session(session, width, height))
    }

    /// Render the current frame to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = Theme::for_mode(self.dark_mode);
        render2d::render_frame(ctx, &self.session.frame(), self.width, self.height, &theme);
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Handle pointer down. Returns true if the frame changed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let target = HitTarget::from(hit_test(self.session.pills().as_slice(), x, y));
        self.session
            .handle(&InputEvent::from_pointer_down(x, y, target))
    }

    /// Handle pointer move. Returns true if the frame changed.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.handle(&InputEvent::from_pointer_move(x, y))
    }

    /// Handle pointer up. Returns a JSON string:
    /// `{"changed":bool, "outcome":"committed"|"split"|"dragEnded"}`
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> String {
        let outcome = self.session.pointer_up(x, y);
        let name = match outcome {
            UpOutcome::Committed(_) => "committed",
            UpOutcome::Split(_) => "split",
            UpOutcome::DragEnded => "dragEnded",
        };
        let c = if outcome.changed() { "true" } else { "false" };
        format!(r#"{{"changed":{c},"outcome":"{name}"}}"#)
    }

    /// Id of the topmost pill at (x, y), if any.
    pub fn pill_at(&self, x: f64, y: f64) -> Option<f64> {
        hit_test(self.session.pills().as_slice(), x, y).map(|id| id.get() as f64)
    }

    /// Ids of every pill a click at (x, y) would split, in paint order.
    pub fn pills_under(&self, x: f64, y: f64) -> Vec<f64> {
        hit_test_all(self.session.pills().as_slice(), x, y)
            .into_iter()
            .map(|id| id.get() as f64)
            .collect()
    }

    pub fn pill_count(&self) -> usize {
        self.session.pills().len()
    }

    /// Current frame as JSON: `{"pills":[...],"cursor":{...},"provisional":id|null}`.
    pub fn frame_json(&self) -> String {
        match self.session.frame().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("{e}");
                let escaped = e.replace('\\', "\\\\").replace('"', "\\\"");
                format!(r#"{{"error":"{escaped}"}}"#)
            }
        }
    }

    /// Current frame as a standalone SVG document.
    pub fn export_svg(&self) -> String {
        let theme = Theme::for_mode(self.dark_mode);
        self.session
            .frame()
            .to_svg(self.width, self.height, &theme)
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl PillCanvas {
    fn from_session(session: Session, width: f64, height: f64) -> Self {
        log::debug!("pill canvas {width}x{height}");
        Self {
            session,
            width,
            height,
            dark_mode: false,
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Pill WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
