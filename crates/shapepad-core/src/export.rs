//! Geometry export: committed shapes flattened to point, line-string and
//! polygon geometries for downstream writers.

use crate::settings::ExportResolution;
use crate::shapes::Shape;
use kurbo::Point;
use serde::{Deserialize, Serialize};

impl Shape {
    /// Flatten to an export geometry. Curves are sampled at `resolution`.
    pub fn to_geometry(&self, resolution: &ExportResolution) -> Geometry {
        match self {
            Shape::Point(p) => Geometry::Point(p.to_point()),
            Shape::Line(s) => Geometry::LineString(vec![s.start.to_point(), s.end.to_point()]),
            Shape::Arc(a) => Geometry::LineString(a.samples(resolution.arc_segments)),
            Shape::Polygon(r) | Shape::Triangle(r) => Geometry::Polygon(r.closed_ring()),
            Shape::Rectangle(r) | Shape::Square(r) => Geometry::Polygon(r.closed_ring()),
            Shape::Circle(f) | Shape::Ellipse(f) => {
                Geometry::Polygon(f.ellipse_ring(resolution.ellipse_segments))
            }
        }
    }
}

/// One exported geometry in model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    /// Open polyline.
    LineString(Vec<Point>),
    /// Closed ring; the first vertex is repeated at the end.
    Polygon(Vec<Point>),
}

impl Geometry {
    /// Vertex count, including a polygon's closing vertex.
    pub fn len(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(v) | Geometry::Polygon(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exported geometries grouped into point, line and polygon layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryLayers {
    pub points: Vec<Point>,
    pub lines: Vec<Vec<Point>>,
    pub polygons: Vec<Vec<Point>>,
}

impl GeometryLayers {
    /// Sort one geometry into its layer.
    pub fn push(&mut self, geometry: Geometry) {
        match geometry {
            Geometry::Point(p) => self.points.push(p),
            Geometry::LineString(v) => self.lines.push(v),
            Geometry::Polygon(v) => self.polygons.push(v),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.polygons.is_empty()
    }
}

impl Extend<Geometry> for GeometryLayers {
    fn extend<I: IntoIterator<Item = Geometry>>(&mut self, iter: I) {
        for geometry in iter {
            self.push(geometry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_sort_geometries() {
        let mut layers = GeometryLayers::default();
        assert!(layers.is_empty());
        layers.extend([
            Geometry::Point(Point::new(1.0, 1.0)),
            Geometry::LineString(vec![Point::ZERO, Point::new(1.0, 0.0)]),
            Geometry::Polygon(vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::ZERO]),
        ]);
        assert_eq!(layers.points.len(), 1);
        assert_eq!(layers.lines.len(), 1);
        assert_eq!(layers.polygons[0].len(), 4);
    }

    #[test]
    fn test_shape_geometries() {
        use crate::geometry::{ArcSpec, Frame, IntPoint, IntRect};
        let res = ExportResolution::default();

        let rect = Shape::Rectangle(IntRect::new(10, 10, 20, 30)).to_geometry(&res);
        assert_eq!(
            rect,
            Geometry::Polygon(vec![
                Point::new(10.0, 10.0),
                Point::new(30.0, 10.0),
                Point::new(30.0, 40.0),
                Point::new(10.0, 40.0),
                Point::new(10.0, 10.0),
            ])
        );

        let ellipse = Shape::Ellipse(Frame::new(0.0, 0.0, 20.0, 10.0)).to_geometry(&res);
        assert_eq!(ellipse.len(), 101);

        let arc = Shape::Arc(ArcSpec::upper_half(Frame::new(0.0, 0.0, 20.0, 10.0))).to_geometry(&res);
        assert!(matches!(arc, Geometry::LineString(ref v) if v.len() == 51));

        let point = Shape::Point(IntPoint::new(4, 5)).to_geometry(&res);
        assert_eq!(point, Geometry::Point(Point::new(4.0, 5.0)));
    }
}
