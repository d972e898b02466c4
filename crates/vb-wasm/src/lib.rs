//! WASM bridge for VecBoard — exposes the two canvas demos to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page forwards
//! pointer coordinates and widget values as plain numbers and strings;
//! all state lives on this side of the boundary, and nothing here
//! panics across it.

mod render2d;

pub use render2d::CanvasTheme;

use vb_core::{CanvasFrame, Color};
use vb_editor::brush::BrushKind;
use vb_editor::input::{InputEvent, Modifiers};
use vb_editor::session::PaintSession;
use vb_editor::shortcuts::{ShortcutAction, ShortcutMap};
use vb_editor::workbench::{Operation, VectorWorkbench, WorkbenchReport};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// ─── Painting demo ───────────────────────────────────────────────────────

/// Canvas controller for the painting demo.
///
/// Holds the paint session (scene + brush state). All interaction from
/// the host page goes through this struct.
#[wasm_bindgen]
pub struct PaintApp {
    session: PaintSession,
    dark_mode: bool,
}

#[wasm_bindgen]
impl PaintApp {
    /// Create a controller for a canvas of the given pixel dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            session: PaintSession::new(CanvasFrame::new(width, height)),
            dark_mode: true,
        }
    }

    /// Resize the canvas. Shapes live in scene space, so they re-project
    /// onto the new dimensions without moving.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.frame = CanvasFrame::new(width, height);
    }

    /// Handle pointer down. Returns true when a re-render is needed.
    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        self.session
            .handle_input(&InputEvent::pointer_down(x, y, modifiers))
    }

    /// Handle pointer move. Stamps while a stroke is active.
    pub fn handle_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        self.session
            .handle_input(&InputEvent::pointer_move(x, y, modifiers))
    }

    /// Handle pointer up, ending the stroke.
    pub fn handle_pointer_up(
        &mut self,
        x: f64,
        y: f64,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> bool {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        self.session
            .handle_input(&InputEvent::pointer_up(x, y, modifiers))
    }

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<name>"}`.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let Some(action) = ShortcutMap::resolve(key, modifiers) else {
            return r#"{"changed":false,"action":"none"}"#.to_string();
        };
        let changed = self.session.apply_action(action);
        let name = action_to_name(action);
        let c = if changed { "true" } else { "false" };
        format!(r#"{{"changed":{c},"action":"{name}"}}"#)
    }

    /// Switch the brush from the UI widget value ("point" / "triangle" /
    /// "circle"). Returns false for unknown names.
    pub fn set_brush(&mut self, name: &str) -> bool {
        match BrushKind::parse(name) {
            Some(kind) => {
                self.session.brush.kind = kind;
                true
            }
            None => {
                log::warn!("unknown brush: {name:?}");
                false
            }
        }
    }

    /// Brush size slider, in canvas pixels.
    pub fn set_size(&mut self, size: f32) {
        self.session.brush.size = size;
    }

    /// Circle fan resolution slider. Clamped to at least 3, the smallest
    /// ring that still encloses an area.
    pub fn set_segments(&mut self, segments: u32) {
        self.session.brush.segments = segments.max(3);
    }

    /// Color sliders (components in [0, 1]).
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.session.brush.color = Color::rgb(r, g, b);
    }

    /// Flip rainbow color cycling. Returns whether it is now enabled.
    pub fn toggle_color_cycle(&mut self) -> bool {
        self.session.brush.toggle_cycle()
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.session
            .apply(vb_editor::session::SceneMutation::Clear);
    }

    /// Stamp the canned tree drawing on top of the scene.
    pub fn plant_tree(&mut self) {
        self.session.plant_tree();
    }

    pub fn shape_count(&self) -> usize {
        self.session.shape_count()
    }

    /// The scene as JSON, for the host's debug panel.
    pub fn scene_json(&self) -> String {
        serde_json::to_string(&self.session.scene).unwrap_or_else(|_| "{}".to_string())
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Render the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = theme_for(self.dark_mode);
        render2d::render_paint_scene(ctx, &self.session.scene, &self.session.frame, &theme);
    }
}

// ─── Vector workbench demo ───────────────────────────────────────────────

/// Canvas controller for the vector workbench demo.
#[wasm_bindgen]
pub struct VectorApp {
    workbench: VectorWorkbench,
    frame: CanvasFrame,
    dark_mode: bool,
}

#[wasm_bindgen]
impl VectorApp {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            workbench: VectorWorkbench::default(),
            frame: CanvasFrame::new(width, height),
            dark_mode: true,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.frame = CanvasFrame::new(width, height);
    }

    /// Replace both input vectors from the coordinate fields
    /// (2D values, z zero-padded).
    pub fn set_vectors(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.workbench.set_vectors(x1, y1, x2, y2);
    }

    /// The scalar field used by mul/div.
    pub fn set_scalar(&mut self, scalar: f64) {
        self.workbench.scalar = scalar;
    }

    /// Select an operation from the UI widget value. Returns false for
    /// unknown names (the selection is left unchanged).
    pub fn set_operation(&mut self, name: &str) -> bool {
        match Operation::parse(name) {
            Some(op) => {
                self.workbench.op = Some(op);
                true
            }
            None => {
                log::warn!("unknown operation: {name:?}");
                false
            }
        }
    }

    /// Back to drawing only the two input arrows.
    pub fn clear_operation(&mut self) {
        self.workbench.op = None;
    }

    /// Evaluate and return the result lines as JSON:
    /// `{"ok":true,"lines":[...]}` or `{"ok":false,"error":"..."}`.
    pub fn evaluate_json(&self) -> String {
        match self.workbench.evaluate() {
            Ok(report) => {
                let lines = serde_json::to_string(&report.lines)
                    .unwrap_or_else(|_| "[]".to_string());
                format!(r#"{{"ok":true,"lines":{lines}}}"#)
            }
            Err(e) => {
                format!(r#"{{"ok":false,"error":"{e}"}}"#)
            }
        }
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Render arrows (and the angle arc, when selected) to a Canvas2D
    /// context. A degenerate operation degrades to drawing only the
    /// input arrows, with a warning on the console surface.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = theme_for(self.dark_mode);
        let report = self.safe_report();
        render2d::render_workbench(ctx, &report, &self.frame, &theme);
    }
}

impl VectorApp {
    fn safe_report(&self) -> WorkbenchReport {
        match self.workbench.evaluate() {
            Ok(report) => report,
            Err(e) => {
                log::warn!("vector workbench: {e}");
                let inputs_only = VectorWorkbench {
                    op: None,
                    ..self.workbench
                };
                inputs_only.evaluate().unwrap_or_default()
            }
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn theme_for(dark: bool) -> CanvasTheme {
    if dark {
        CanvasTheme::dark()
    } else {
        CanvasTheme::light()
    }
}

fn action_to_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::BrushPoint => "brushPoint",
        ShortcutAction::BrushTriangle => "brushTriangle",
        ShortcutAction::BrushCircle => "brushCircle",
        ShortcutAction::ToggleColorCycle => "toggleColorCycle",
        ShortcutAction::ClearCanvas => "clearCanvas",
        ShortcutAction::PlantTree => "plantTree",
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
                let msg = format!("VecBoard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn click_then_drag_stamps_shapes() {
        let mut app = PaintApp::new(400.0, 400.0);
        assert!(app.handle_pointer_down(100.0, 100.0, false, false, false, false));
        assert!(app.handle_pointer_move(110.0, 100.0, false, false, false, false));
        assert!(!app.handle_pointer_up(110.0, 100.0, false, false, false, false));
        assert_eq!(app.shape_count(), 2);
    }

    #[test]
    fn set_brush_validates_widget_values() {
        let mut app = PaintApp::new(400.0, 400.0);
        assert!(app.set_brush("circle"));
        assert!(!app.set_brush("lasso"));
    }

    #[test]
    fn handle_key_reports_action_json() {
        let mut app = PaintApp::new(400.0, 400.0);
        assert_eq!(
            app.handle_key("g", false, false, false, false),
            r#"{"changed":true,"action":"plantTree"}"#
        );
        assert_eq!(app.shape_count(), 22);
        assert_eq!(
            app.handle_key("q", false, false, false, false),
            r#"{"changed":false,"action":"none"}"#
        );
    }

    #[test]
    fn scene_json_is_valid_json() {
        let mut app = PaintApp::new(400.0, 400.0);
        app.plant_tree();
        let parsed: serde_json::Value = serde_json::from_str(&app.scene_json()).unwrap();
        assert!(parsed.is_object());
    }

    #[test]
    fn evaluate_json_reports_lines() {
        let mut app = VectorApp::new(400.0, 400.0);
        app.set_vectors(3.0, 0.0, 0.0, 4.0);
        assert!(app.set_operation("magnitude"));
        let parsed: serde_json::Value = serde_json::from_str(&app.evaluate_json()).unwrap();
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["lines"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn evaluate_json_surfaces_degenerate_inputs() {
        let mut app = VectorApp::new(400.0, 400.0);
        app.set_scalar(0.0);
        assert!(app.set_operation("div"));
        let parsed: serde_json::Value = serde_json::from_str(&app.evaluate_json()).unwrap();
        assert_eq!(parsed["ok"], false);
        assert!(
            parsed["error"]
                .as_str()
                .unwrap()
                .contains("division by zero")
        );
    }

    #[test]
    fn unknown_operation_leaves_selection_unchanged() {
        let mut app = VectorApp::new(400.0, 400.0);
        assert!(app.set_operation("add"));
        assert!(!app.set_operation("determinant"));
        // Still on add: evaluation succeeds with three arrows' lines empty.
        let parsed: serde_json::Value = serde_json::from_str(&app.evaluate_json()).unwrap();
        assert_eq!(parsed["ok"], true);
    }
}
