use super::{CoordinateError, VertexManager, VertexRule, VertexStep};
use crate::geometry::{IntPoint, Ring};
use crate::input::MouseButton;
use crate::shapes::{Shape, ShapeKind};

/// Any number of vertices; the secondary button closes the ring.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonRule;

impl VertexRule for PolygonRule {
    const KIND: ShapeKind = ShapeKind::Polygon;

    fn step(_pending: usize, button: MouseButton) -> VertexStep {
        if button.is_secondary() {
            VertexStep::Close
        } else {
            VertexStep::Continue
        }
    }

    fn wrap(ring: Ring) -> Shape {
        Shape::Polygon(ring)
    }
}

/// Exactly three vertices; the third click closes the ring.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleRule;

impl TriangleRule {
    pub const VERTICES: usize = 3;
}

impl VertexRule for TriangleRule {
    const KIND: ShapeKind = ShapeKind::Triangle;

    fn step(pending: usize, _button: MouseButton) -> VertexStep {
        if pending >= Self::VERTICES {
            VertexStep::Close
        } else {
            VertexStep::Continue
        }
    }

    fn wrap(ring: Ring) -> Shape {
        Shape::Triangle(ring)
    }

    fn from_points(points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        if points.len() != Self::VERTICES {
            return Err(CoordinateError::PointCount {
                kind: Self::KIND,
                expected: Self::VERTICES,
                found: points.len(),
            });
        }
        let ring = Ring::new(points.to_vec()).ok_or(CoordinateError::TooFewPoints {
            kind: Self::KIND,
            minimum: Ring::MIN_VERTICES,
            found: points.len(),
        })?;
        Ok(vec![Shape::Triangle(ring)])
    }
}

pub type PolygonManager = VertexManager<PolygonRule>;
pub type TriangleManager = VertexManager<TriangleRule>;
