//! Shape kinds and the tagged shape descriptor.
//!
//! [`Shape`] is the closed set of geometries the editor manages. Every per-kind
//! operation (hit-test, translate, render path, canonical line) is a single
//! dispatch over it, so adding a kind is checked exhaustively by the compiler.

use crate::codec::{self, CodecError};
use crate::geometry::{ArcSpec, Frame, IntPoint, IntRect, Ring, Segment, PATH_TOLERANCE};
use crate::settings::HitTolerance;
use kurbo::{BezPath, Circle, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine shape kinds, each owned by its own manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    Polygon,
    Triangle,
    Rectangle,
    Square,
    Circle,
    Ellipse,
    Arc,
}

impl ShapeKind {
    /// Every kind, in the stable order used for rendering and serialization.
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Polygon,
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Arc,
    ];

    /// Tag written at the start of a canonical line.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Arc => "Arc",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| CodecError::UnknownKind(s.to_string()))
    }
}

/// A committed shape of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(IntPoint),
    Line(Segment),
    Polygon(Ring),
    /// A ring of exactly three vertices.
    Triangle(Ring),
    Rectangle(IntRect),
    /// Width equals height when drawn or inserted; translation keeps it that
    /// way, nothing else enforces it.
    Square(IntRect),
    /// Width equals height when drawn or inserted; translation keeps it that
    /// way, nothing else enforces it.
    Circle(Frame),
    Ellipse(Frame),
    Arc(ArcSpec),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Arc(_) => ShapeKind::Arc,
        }
    }

    /// Whether a click at `point` lands on this shape.
    ///
    /// Points use a distance radius and lines a distance to their infinite
    /// line; every other kind uses area containment.
    pub fn hit_test(&self, point: Point, tolerance: &HitTolerance) -> bool {
        match self {
            Shape::Point(p) => p.distance(point) < tolerance.point_radius,
            Shape::Line(s) => s.line_distance(point) < tolerance.line_distance,
            Shape::Polygon(r) | Shape::Triangle(r) => r.contains(point),
            Shape::Rectangle(r) | Shape::Square(r) => r.contains(point),
            Shape::Circle(f) | Shape::Ellipse(f) => f.ellipse_contains(point),
            Shape::Arc(a) => a.contains(point),
        }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Point(p) => p.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Polygon(r) | Shape::Triangle(r) => r.translate(dx, dy),
            Shape::Rectangle(r) | Shape::Square(r) => r.translate(dx, dy),
            Shape::Circle(f) | Shape::Ellipse(f) => f.translate(dx, dy),
            Shape::Arc(a) => a.translate(dx, dy),
        }
    }

    /// Outline path in model space. Points become a disc of `point_radius`.
    pub fn to_path(&self, point_radius: f64) -> BezPath {
        match self {
            Shape::Point(p) => Circle::new(p.to_point(), point_radius).to_path(PATH_TOLERANCE),
            Shape::Line(s) => s.to_path(),
            Shape::Polygon(r) | Shape::Triangle(r) => r.to_path(),
            Shape::Rectangle(r) | Shape::Square(r) => r.to_path(),
            Shape::Circle(f) | Shape::Ellipse(f) => f.ellipse_path(),
            Shape::Arc(a) => a.to_path(),
        }
    }

    /// Canonical line for this shape, newline-terminated.
    pub fn encode(&self) -> String {
        codec::encode(self)
    }
}

impl FromStr for Shape {
    type Err = CodecError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        codec::decode(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.tag().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "Hexagon".parse::<ShapeKind>(),
            Err(CodecError::UnknownKind("Hexagon".to_string()))
        );
        // Tags are case-sensitive.
        assert!("point".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_point_hit_radius() {
        let shape = Shape::Point(IntPoint::new(0, 0));
        let tol = HitTolerance::default();
        assert!(shape.hit_test(Point::new(3.0, 3.0), &tol));
        assert!(!shape.hit_test(Point::new(5.0, 0.0), &tol));
    }

    #[test]
    fn test_line_hit_distance() {
        let shape = Shape::Line(Segment::new(IntPoint::new(0, 0), IntPoint::new(100, 0)));
        let tol = HitTolerance::default();
        assert!(shape.hit_test(Point::new(200.0, 3.0), &tol));
        assert!(!shape.hit_test(Point::new(50.0, 4.0), &tol));
    }

    #[test]
    fn test_translate_moves_geometry() {
        let mut shape = Shape::Ellipse(Frame::new(1.0, 2.0, 10.0, 20.0));
        shape.translate(5, -2);
        assert_eq!(shape, Shape::Ellipse(Frame::new(6.0, 0.0, 10.0, 20.0)));

        let mut shape = Shape::Square(IntRect::new(0, 0, 4, 4));
        shape.translate(-1, 1);
        assert_eq!(shape, Shape::Square(IntRect::new(-1, 1, 4, 4)));
    }

    #[test]
    fn test_point_path_is_closed_disc() {
        let path = Shape::Point(IntPoint::new(10, 10)).to_path(3.0);
        let bounds = path.bounding_box();
        assert!((bounds.width() - 6.0).abs() < 1e-6);
        assert!((bounds.x0 - 7.0).abs() < 1e-6);
    }
}
