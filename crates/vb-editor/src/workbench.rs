//! The vector workbench: demo logic behind the arrow-drawing canvas.
//!
//! Holds the two input vectors, the scalar, and the selected operation,
//! and evaluates them into a render-ready report: arrows to draw, an
//! optional angle arc, and human-readable result lines for the console
//! surface. All math comes from `vb_core::vec3`; degenerate inputs
//! (zero divisor, zero-magnitude normalize/angle) surface as `GeomError`.

use vb_core::{Color, GeomError, Vec3, angle_between, triangle_area};

/// Arrow colors: inputs are fixed red/blue, every derived vector is
/// drawn green.
pub const INPUT_1_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
pub const INPUT_2_COLOR: Color = Color::rgb(0.0, 0.0, 1.0);
pub const DERIVED_COLOR: Color = Color::rgb(0.0, 1.0, 0.0);

/// Canvas radius of the angle arc, in pixels.
pub const ARC_RADIUS_PX: f64 = 30.0;

/// The operation selector, parsed from the UI widget value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Magnitude,
    Normalize,
    AngleBetween,
    TriangleArea,
}

impl Operation {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mul" => Some(Self::Mul),
            "div" => Some(Self::Div),
            "magnitude" => Some(Self::Magnitude),
            "normalize" => Some(Self::Normalize),
            "angle" | "angleBetween" => Some(Self::AngleBetween),
            "area" => Some(Self::TriangleArea),
            _ => None,
        }
    }
}

/// A world-space arrow ready to be projected and drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub vector: Vec3,
    pub color: Color,
}

/// The yellow arc visualizing the angle between the inputs.
///
/// `start` is the canvas-space angle of v1 (y already flipped), `sweep`
/// the included angle; both in radians. The renderer draws the arc
/// around the canvas origin at [`ARC_RADIUS_PX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleArc {
    pub start: f64,
    pub sweep: f64,
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, Default)]
pub struct WorkbenchReport {
    pub arrows: Vec<Arrow>,
    pub arc: Option<AngleArc>,
    pub lines: Vec<String>,
}

/// State of the vector workbench demo.
#[derive(Debug, Clone, Copy)]
pub struct VectorWorkbench {
    pub v1: Vec3,
    pub v2: Vec3,
    pub scalar: f64,
    /// `None` before the user picks an operation: only the inputs draw.
    pub op: Option<Operation>,
}

impl Default for VectorWorkbench {
    fn default() -> Self {
        Self {
            v1: Vec3::from_xy(2.25, 2.25),
            v2: Vec3::from_xy(-2.0, 2.0),
            scalar: 2.0,
            op: None,
        }
    }
}

impl VectorWorkbench {
    /// Replace both input vectors from 2D field values (z zero-padded).
    pub fn set_vectors(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.v1 = Vec3::from_xy(x1, y1);
        self.v2 = Vec3::from_xy(x2, y2);
    }

    /// Evaluate the current operation into a report.
    ///
    /// The input arrows are always present; the selected operation adds
    /// derived arrows, result lines, or the angle arc. Fails with the
    /// uniform degenerate-input policy of the math layer.
    pub fn evaluate(&self) -> Result<WorkbenchReport, GeomError> {
        let mut report = WorkbenchReport {
            arrows: vec![
                Arrow {
                    vector: self.v1,
                    color: INPUT_1_COLOR,
                },
                Arrow {
                    vector: self.v2,
                    color: INPUT_2_COLOR,
                },
            ],
            ..Default::default()
        };

        let Some(op) = self.op else {
            return Ok(report);
        };

        match op {
            Operation::Add => report.push_derived(self.v1 + self.v2),
            Operation::Sub => report.push_derived(self.v1 - self.v2),
            Operation::Mul => {
                report.push_derived(self.v1.scaled(self.scalar));
                report.push_derived(self.v2.scaled(self.scalar));
            }
            Operation::Div => {
                report.push_derived(self.v1.divided(self.scalar)?);
                report.push_derived(self.v2.divided(self.scalar)?);
            }
            Operation::Magnitude => {
                report.push_line(format!("Magnitude of v1: {}", self.v1.magnitude()));
                report.push_line(format!("Magnitude of v2: {}", self.v2.magnitude()));
            }
            Operation::Normalize => {
                report.push_derived(self.v1.normalized()?);
                report.push_derived(self.v2.normalized()?);
            }
            Operation::AngleBetween => {
                let angle = angle_between(self.v1, self.v2)?;
                report.push_line(format!(
                    "Angle between v1 and v2 (degrees): {}",
                    angle.degrees
                ));
                // Arc starts at v1's canvas angle; canvas y points down,
                // hence the negated y.
                report.arc = Some(AngleArc {
                    start: (-self.v1.y).atan2(self.v1.x),
                    sweep: angle.radians,
                });
            }
            Operation::TriangleArea => {
                report.push_line(format!(
                    "Area of the triangle formed by v1 and v2: {}",
                    triangle_area(self.v1, self.v2)
                ));
            }
        }

        Ok(report)
    }
}

impl WorkbenchReport {
    fn push_derived(&mut self, vector: Vec3) {
        self.arrows.push(Arrow {
            vector,
            color: DERIVED_COLOR,
        });
    }

    fn push_line(&mut self, line: String) {
        log::info!("{line}");
        self.lines.push(line);
    }
}
