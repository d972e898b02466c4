//! The stamp brush.
//!
//! One parameterized tool covers all three shape kinds: pointer down
//! stamps a shape at the pointer, dragging stamps repeatedly, pointer up
//! ends the stroke. Shape kind, color, size, and segment count come from
//! `BrushSettings`; when color cycling is enabled each stamp takes the
//! next rainbow color instead of the configured one.

use crate::input::InputEvent;
use crate::session::SceneMutation;
use vb_core::{CanvasFrame, Color, RAINBOW, Shape, ShapeId, ShapeKind};

/// Divisor turning the pixel size slider into scene-unit extents for
/// triangles and circles. Point sprites keep their pixel size.
const SIZE_TO_SCENE: f32 = 200.0;

/// The brush-mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushKind {
    Point,
    Triangle,
    Circle,
}

impl BrushKind {
    /// Parse the UI widget value ("point" / "triangle" / "circle").
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "point" => Some(Self::Point),
            "triangle" => Some(Self::Triangle),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }

    /// Prefix for generated shape ids.
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Triangle => "tri",
            Self::Circle => "circle",
        }
    }
}

/// Rainbow-cycling state: the index of the next color to hand out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorCycle {
    next: usize,
}

impl ColorCycle {
    /// The next palette color, advancing with wrap-around.
    pub fn advance(&mut self) -> Color {
        let color = RAINBOW[self.next];
        self.next = (self.next + 1) % RAINBOW.len();
        color
    }
}

/// Brush configuration, mutated by the UI controls.
#[derive(Debug, Clone, Copy)]
pub struct BrushSettings {
    pub kind: BrushKind,
    /// Color from the sliders; used when cycling is off.
    pub color: Color,
    /// Size slider value, in canvas pixels.
    pub size: f32,
    /// Circle fan resolution.
    pub segments: u32,
    /// `Some` while color cycling is enabled.
    pub cycle: Option<ColorCycle>,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            kind: BrushKind::Point,
            color: RAINBOW[0],
            size: 10.0,
            segments: 20,
            cycle: None,
        }
    }
}

impl BrushSettings {
    /// Flip color cycling. Returns true when cycling is now enabled.
    /// Re-enabling restarts the cycle from red.
    pub fn toggle_cycle(&mut self) -> bool {
        self.cycle = match self.cycle {
            Some(_) => None,
            None => Some(ColorCycle::default()),
        };
        self.cycle.is_some()
    }

    /// The color for the next stamp: the cycle color when cycling,
    /// otherwise the configured color.
    pub fn stamp_color(&mut self) -> Color {
        match &mut self.cycle {
            Some(cycle) => cycle.advance(),
            None => self.color,
        }
    }
}

/// The stateful stamp tool. `painting` is the gesture flag that makes
/// drag painting work without button state in move events.
#[derive(Debug, Default)]
pub struct BrushTool {
    painting: bool,
}

impl BrushTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an input event, returning zero or more mutations.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        frame: &CanvasFrame,
        settings: &mut BrushSettings,
    ) -> Vec<SceneMutation> {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                self.painting = true;
                vec![stamp(*x, *y, frame, settings)]
            }
            InputEvent::PointerMove { x, y, .. } => {
                if self.painting {
                    vec![stamp(*x, *y, frame, settings)]
                } else {
                    vec![]
                }
            }
            InputEvent::PointerUp { .. } => {
                self.painting = false;
                vec![]
            }
            InputEvent::Key { .. } => vec![],
        }
    }
}

/// Build the AddShape mutation for one stamp at a canvas position.
fn stamp(x: f64, y: f64, frame: &CanvasFrame, settings: &mut BrushSettings) -> SceneMutation {
    let center = frame.canvas_to_scene(x, y);
    let color = settings.stamp_color();
    let kind = match settings.kind {
        BrushKind::Point => ShapeKind::Point {
            size: settings.size,
        },
        BrushKind::Triangle => ShapeKind::Triangle {
            size: settings.size / SIZE_TO_SCENE,
        },
        BrushKind::Circle => ShapeKind::Circle {
            radius: settings.size / SIZE_TO_SCENE,
            segments: settings.segments,
        },
    };
    let id = ShapeId::with_prefix(settings.kind.id_prefix());
    SceneMutation::AddShape {
        shape: Shape::new(id, center, color, kind),
    }
}
