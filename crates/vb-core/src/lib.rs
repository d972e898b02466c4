pub mod art;
pub mod error;
pub mod id;
pub mod model;
pub mod project;
pub mod vec3;

pub use error::GeomError;
pub use id::ShapeId;
pub use model::{Color, RAINBOW, Scene, ScenePoint, Shape, ShapeKind};
pub use project::CanvasFrame;
pub use vec3::{Angle, Vec3, angle_between, triangle_area};
