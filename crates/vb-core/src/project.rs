//! Canvas projection.
//!
//! Converts between the three coordinate spaces the demos use:
//!
//! - **world units** — what the vector workbench operates in; arrows are
//!   drawn from the canvas center at a fixed pixels-per-unit scale with
//!   the y axis inverted (screen y grows downward).
//! - **scene space** — the normalized [-1, 1] square shapes live in,
//!   y up.
//! - **canvas pixels** — what the rendering surface consumes.

use crate::model::ScenePoint;
use crate::vec3::Vec3;
use serde::{Deserialize, Serialize};

/// Pixels per world unit for vector arrows.
pub const PX_PER_UNIT: f64 = 20.0;

/// The canvas viewport plus the fixed unit scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasFrame {
    pub width: f64,
    pub height: f64,
    pub px_per_unit: f64,
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

impl CanvasFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            px_per_unit: PX_PER_UNIT,
        }
    }

    /// Canvas center — the origin every vector arrow starts from.
    pub fn origin(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Canvas position of a world vector's tip. Only x and y are used;
    /// z is ignored for 2D drawing.
    pub fn vector_tip(&self, v: Vec3) -> (f64, f64) {
        let (cx, cy) = self.origin();
        (cx + v.x * self.px_per_unit, cy - v.y * self.px_per_unit)
    }

    /// Scene point → canvas pixels.
    pub fn scene_to_canvas(&self, p: ScenePoint) -> (f64, f64) {
        let (cx, cy) = self.origin();
        (
            cx + p.x as f64 * self.width / 2.0,
            cy - p.y as f64 * self.height / 2.0,
        )
    }

    /// Canvas pixels → scene point. Inverse of [`CanvasFrame::scene_to_canvas`];
    /// this is how pointer positions become stamp centers.
    pub fn canvas_to_scene(&self, x: f64, y: f64) -> ScenePoint {
        let (cx, cy) = self.origin();
        ScenePoint::new(
            ((x - cx) / (self.width / 2.0)) as f32,
            ((cy - y) / (self.height / 2.0)) as f32,
        )
    }
}
