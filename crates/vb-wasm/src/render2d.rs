//! Canvas2D renderer for both demos.
//!
//! Draws stamped shapes from their tessellated vertices and workbench
//! arrows from their projected tips via `CanvasRenderingContext2d`.
//! Circles are deliberately drawn as the faceted fan polygon, so a low
//! segment count looks faceted on screen exactly as it is in the data.

use vb_core::{CanvasFrame, Color, Scene, ShapeKind};
use vb_editor::workbench::{ARC_RADIUS_PX, AngleArc, Arrow, WorkbenchReport};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent canvas colors.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub grid: &'static str,
    pub arc: &'static str,
}

impl CanvasTheme {
    /// Dark theme — the classic black drawing surface.
    pub fn dark() -> Self {
        Self {
            bg: "#000000",
            grid: "rgba(255, 255, 255, 0.06)",
            arc: "#FFFF00",
        }
    }

    /// Light theme for embedding in bright host pages.
    pub fn light() -> Self {
        Self {
            bg: "#F5F5F7",
            grid: "rgba(0, 0, 0, 0.05)",
            arc: "#B8860B",
        }
    }
}

// ─── Painting canvas ─────────────────────────────────────────────────────

/// Render the paint scene: background, grid dots, then every shape in
/// paint order.
pub fn render_paint_scene(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    frame: &CanvasFrame,
    theme: &CanvasTheme,
) {
    clear_canvas(ctx, frame, theme);
    draw_grid(ctx, frame, theme);

    for shape in scene.iter() {
        let verts = shape.vertices();
        match shape.kind {
            ShapeKind::Point { size } => {
                let (x, y) = frame.scene_to_canvas(verts[0]);
                let s = size as f64;
                set_fill(ctx, shape.color);
                // Square point sprite centered on the stamp position.
                ctx.fill_rect(x - s / 2.0, y - s / 2.0, s, s);
            }
            ShapeKind::Triangle { .. } | ShapeKind::Circle { .. } => {
                // Circles skip the fan center — the rim ring already
                // closes the filled outline.
                let outline = match shape.kind {
                    ShapeKind::Circle { .. } => &verts[1..],
                    _ => &verts[..],
                };
                ctx.begin_path();
                let (x0, y0) = frame.scene_to_canvas(outline[0]);
                ctx.move_to(x0, y0);
                for &v in &outline[1..] {
                    let (x, y) = frame.scene_to_canvas(v);
                    ctx.line_to(x, y);
                }
                ctx.close_path();
                set_fill(ctx, shape.color);
                ctx.fill();
            }
        }
    }
}

// ─── Workbench canvas ────────────────────────────────────────────────────

/// Render a workbench report: background, arrows from the center, and
/// the angle arc when present.
pub fn render_workbench(
    ctx: &CanvasRenderingContext2d,
    report: &WorkbenchReport,
    frame: &CanvasFrame,
    theme: &CanvasTheme,
) {
    clear_canvas(ctx, frame, theme);

    for arrow in &report.arrows {
        draw_arrow(ctx, arrow, frame);
    }
    if let Some(arc) = &report.arc {
        draw_angle_arc(ctx, arc, frame, theme);
    }
}

/// One arrow from the canvas center to the projected vector tip.
fn draw_arrow(ctx: &CanvasRenderingContext2d, arrow: &Arrow, frame: &CanvasFrame) {
    let (ox, oy) = frame.origin();
    let (tx, ty) = frame.vector_tip(arrow.vector);
    let color = arrow.color.to_hex();

    ctx.begin_path();
    ctx.move_to(ox, oy);
    ctx.line_to(tx, ty);
    ctx.set_stroke_style_str(&color);
    ctx.set_line_width(1.5);
    ctx.stroke();

    // No arrowhead on zero-length arrows.
    if (tx - ox).abs() > f64::EPSILON || (ty - oy).abs() > f64::EPSILON {
        draw_arrowhead(ctx, ox, oy, tx, ty, &color);
    }
}

fn draw_arrowhead(
    ctx: &CanvasRenderingContext2d,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: &str,
) {
    let angle = (y2 - y1).atan2(x2 - x1);
    let size = 8.0;

    ctx.save();
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.move_to(x2, y2);
    ctx.line_to(x2 - size * (angle - 0.4).cos(), y2 - size * (angle - 0.4).sin());
    ctx.line_to(x2 - size * (angle + 0.4).cos(), y2 - size * (angle + 0.4).sin());
    ctx.close_path();
    ctx.fill();
    ctx.restore();
}

/// The arc showing the included angle, centered on the canvas origin.
fn draw_angle_arc(
    ctx: &CanvasRenderingContext2d,
    arc: &AngleArc,
    frame: &CanvasFrame,
    theme: &CanvasTheme,
) {
    let (cx, cy) = frame.origin();
    ctx.save();
    ctx.begin_path();
    ctx.set_stroke_style_str(theme.arc);
    ctx.set_line_width(2.0);
    let _ = ctx.arc(cx, cy, ARC_RADIUS_PX, arc.start, arc.start + arc.sweep);
    ctx.stroke();
    ctx.restore();
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn clear_canvas(ctx: &CanvasRenderingContext2d, frame: &CanvasFrame, theme: &CanvasTheme) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, frame: &CanvasFrame, theme: &CanvasTheme) {
    ctx.set_fill_style_str(theme.grid);
    let spacing = 20.0;
    let mut x = 0.0;
    while x < frame.width {
        let mut y = 0.0;
        while y < frame.height {
            ctx.fill_rect(x, y, 1.0, 1.0);
            y += spacing;
        }
        x += spacing;
    }
}

fn set_fill(ctx: &CanvasRenderingContext2d, color: Color) {
    ctx.set_fill_style_str(&color.to_hex());
}
