//! Paint session: the single application-state struct behind the
//! painting canvas.
//!
//! The session owns the scene, the brush settings, and the canvas frame.
//! Every state transition goes through a `SceneMutation`, so callers
//! (wasm bridge, shortcuts, tests) share one update path and nothing
//! mutates the scene behind the session's back.

use crate::brush::{BrushKind, BrushSettings, BrushTool};
use crate::input::InputEvent;
use crate::shortcuts::ShortcutAction;
use vb_core::{CanvasFrame, Scene, Shape, ShapeId, art};

/// A mutation that can be applied to the paint scene.
#[derive(Debug, Clone)]
pub enum SceneMutation {
    AddShape { shape: Shape },
    AddShapes { shapes: Vec<Shape> },
    RemoveShape { id: ShapeId },
    Clear,
}

/// All mutable state of the painting tool.
pub struct PaintSession {
    pub scene: Scene,
    pub brush: BrushSettings,
    pub frame: CanvasFrame,
    tool: BrushTool,
}

impl PaintSession {
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            scene: Scene::new(),
            brush: BrushSettings::default(),
            frame,
            tool: BrushTool::new(),
        }
    }

    /// Route a pointer event through the brush tool and apply whatever
    /// it stamped. Returns true when the scene changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let mutations = self.tool.handle(event, &self.frame, &mut self.brush);
        let changed = !mutations.is_empty();
        for mutation in mutations {
            self.apply(mutation);
        }
        changed
    }

    /// Apply one mutation to the scene.
    pub fn apply(&mut self, mutation: SceneMutation) {
        match mutation {
            SceneMutation::AddShape { shape } => {
                log::debug!(
                    "stamp {} at ({:.3}, {:.3})",
                    shape.id,
                    shape.center.x,
                    shape.center.y
                );
                self.scene.add(shape);
            }
            SceneMutation::AddShapes { shapes } => {
                self.scene.extend(shapes);
            }
            SceneMutation::RemoveShape { id } => {
                self.scene.remove(id);
            }
            SceneMutation::Clear => {
                log::info!("clear canvas ({} shapes)", self.scene.len());
                self.scene.clear();
            }
        }
    }

    /// Dispatch a resolved shortcut. Returns true when a re-render is
    /// needed (brush switches change no pixels, so they return false).
    pub fn apply_action(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::BrushPoint => {
                self.brush.kind = BrushKind::Point;
                false
            }
            ShortcutAction::BrushTriangle => {
                self.brush.kind = BrushKind::Triangle;
                false
            }
            ShortcutAction::BrushCircle => {
                self.brush.kind = BrushKind::Circle;
                false
            }
            ShortcutAction::ToggleColorCycle => {
                self.brush.toggle_cycle();
                false
            }
            ShortcutAction::ClearCanvas => {
                self.apply(SceneMutation::Clear);
                true
            }
            ShortcutAction::PlantTree => {
                self.plant_tree();
                true
            }
        }
    }

    /// Stamp the canned tree art on top of the current scene.
    pub fn plant_tree(&mut self) {
        let shapes = art::tree();
        log::info!("plant tree ({} triangles)", shapes.len());
        self.apply(SceneMutation::AddShapes { shapes });
    }

    pub fn shape_count(&self) -> usize {
        self.scene.len()
    }
}
