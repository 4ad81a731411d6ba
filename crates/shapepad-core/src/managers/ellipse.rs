use super::{AnchoredManager, AnchoredShape};
use crate::geometry::{Frame, IntPoint};
use crate::shapes::{Shape, ShapeKind};

/// Ellipse inscribed in the box spanned by the two clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseShape;

impl AnchoredShape for EllipseShape {
    const KIND: ShapeKind = ShapeKind::Ellipse;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Ellipse(Frame::from_corners(anchor, end))
    }
}

/// Circle centred on the first click, through the second.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleShape;

impl AnchoredShape for CircleShape {
    const KIND: ShapeKind = ShapeKind::Circle;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Circle(Frame::circle_through(anchor, end))
    }
}

pub type EllipseManager = AnchoredManager<EllipseShape>;
pub type CircleManager = AnchoredManager<CircleShape>;
