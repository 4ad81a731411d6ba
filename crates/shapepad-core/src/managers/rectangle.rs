use super::{AnchoredManager, AnchoredShape};
use crate::geometry::{IntPoint, IntRect};
use crate::shapes::{Shape, ShapeKind};

/// Axis-aligned box spanned by the two clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleShape;

impl AnchoredShape for RectangleShape {
    const KIND: ShapeKind = ShapeKind::Rectangle;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Rectangle(IntRect::from_corners(anchor, end))
    }
}

/// Square at the clicks' top-left corner, sized by the larger axis delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareShape;

impl AnchoredShape for SquareShape {
    const KIND: ShapeKind = ShapeKind::Square;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Square(IntRect::square_from_corners(anchor, end))
    }
}

pub type RectangleManager = AnchoredManager<RectangleShape>;
pub type SquareManager = AnchoredManager<SquareShape>;
