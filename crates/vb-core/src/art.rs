//! Canned triangle art: a fir tree with a trunk, stump, three canopy
//! layers, and a star on top. Stamped into the scene as ordinary
//! triangles so it mixes with brush strokes and clears with them.

use crate::id::ShapeId;
use crate::model::{Color, Scene, ScenePoint, Shape, ShapeKind};

const TRUNK: Color = Color::rgb(0.55, 0.27, 0.07);
const STUMP: Color = Color::rgb(0.40, 0.2, 0.0);
const STAR: Color = Color::rgb(1.0, 1.0, 0.0);

/// (center x, center y, size, color) per triangle, bottom layer first.
const TREE_LAYOUT: [(f32, f32, f32, Color); 22] = [
    // Trunk halves and stump
    (-0.02, -0.7, 0.04, TRUNK),
    (0.02, -0.7, 0.04, TRUNK),
    (0.0, -0.75, 0.05, STUMP),
    // Bottom canopy
    (0.0, -0.4, 0.35, Color::rgb(0.0, 0.5, 0.0)),
    (-0.25, -0.4, 0.2, Color::rgb(0.0, 0.5, 0.0)),
    (0.25, -0.4, 0.2, Color::rgb(0.0, 0.5, 0.0)),
    // Middle canopy
    (0.0, -0.15, 0.25, Color::rgb(0.0, 0.7, 0.0)),
    (-0.2, -0.15, 0.15, Color::rgb(0.0, 0.7, 0.0)),
    (0.2, -0.15, 0.15, Color::rgb(0.0, 0.7, 0.0)),
    // Top canopy
    (0.0, 0.05, 0.15, Color::rgb(0.0, 0.8, 0.0)),
    (-0.1, 0.05, 0.1, Color::rgb(0.0, 0.8, 0.0)),
    (0.1, 0.05, 0.1, Color::rgb(0.0, 0.8, 0.0)),
    // Star
    (0.0, 0.22, 0.05, STAR),
    // Foliage fill between the layers
    (-0.15, -0.2, 0.1, Color::rgb(0.0, 0.6, 0.0)),
    (0.15, -0.2, 0.1, Color::rgb(0.0, 0.6, 0.0)),
    (-0.25, -0.1, 0.08, Color::rgb(0.0, 0.65, 0.0)),
    (0.25, -0.1, 0.08, Color::rgb(0.0, 0.65, 0.0)),
    (-0.1, 0.15, 0.08, Color::rgb(0.0, 0.75, 0.0)),
    (0.1, 0.15, 0.08, Color::rgb(0.0, 0.75, 0.0)),
    (0.0, -0.55, 0.1, Color::rgb(0.0, 0.4, 0.0)),
    (-0.2, -0.55, 0.08, Color::rgb(0.0, 0.45, 0.0)),
    (0.2, -0.55, 0.08, Color::rgb(0.0, 0.45, 0.0)),
];

/// Build the tree as a fresh batch of triangles with unique ids.
pub fn tree() -> Vec<Shape> {
    TREE_LAYOUT
        .iter()
        .map(|&(x, y, size, color)| {
            Shape::new(
                ShapeId::with_prefix("tree"),
                ScenePoint::new(x, y),
                color,
                ShapeKind::Triangle { size },
            )
        })
        .collect()
}

/// Stamp the tree on top of whatever is already in the scene.
pub fn plant_tree(scene: &mut Scene) {
    scene.extend(tree());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_is_all_triangles() {
        let shapes = tree();
        assert_eq!(shapes.len(), 22);
        assert!(
            shapes
                .iter()
                .all(|s| matches!(s.kind, ShapeKind::Triangle { .. }))
        );
    }

    #[test]
    fn tree_has_a_yellow_star_on_top() {
        let shapes = tree();
        let star = shapes
            .iter()
            .max_by(|a, b| a.center.y.total_cmp(&b.center.y))
            .unwrap();
        assert_eq!(star.color, STAR);
    }

    #[test]
    fn plant_tree_appends_to_existing_scene() {
        let mut scene = Scene::new();
        scene.add(Shape::new(
            ShapeId::intern("existing"),
            ScenePoint::default(),
            Color::rgb(1.0, 0.0, 0.0),
            ShapeKind::Point { size: 10.0 },
        ));
        plant_tree(&mut scene);
        assert_eq!(scene.len(), 23);
    }

    #[test]
    fn repeated_trees_get_fresh_ids() {
        let first = tree();
        let second = tree();
        assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
    }
}
