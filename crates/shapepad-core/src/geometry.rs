//! Geometry primitives and their containment predicates.
//!
//! Pointer coordinates live on an integer lattice; points, segments, rings and
//! rectangles keep integer coordinates while ellipse-family frames use `f64`.

use kurbo::{Arc, BezPath, Ellipse, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flattening tolerance used when converting curves to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// A point on the integer model-space lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate a model-space point toward zero onto the lattice.
    pub fn from_model(point: Point) -> Self {
        Self::new(point.x as i32, point.y as i32)
    }

    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance to a model-space point.
    pub fn distance(self, other: Point) -> f64 {
        self.to_point().distance(other)
    }

    /// Offset from `self` to `other`.
    pub fn delta_to(self, other: IntPoint) -> (i32, i32) {
        (
            other.x.saturating_sub(self.x),
            other.y.saturating_sub(self.y),
        )
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }
}

impl From<IntPoint> for Point {
    fn from(p: IntPoint) -> Self {
        p.to_point()
    }
}

/// Distance between two lattice coordinates, saturating at `i32::MAX`.
fn span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}

/// Axis-aligned rectangle on the integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanned by two opposite corners.
    pub fn from_corners(a: IntPoint, b: IntPoint) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            span(a.x, b.x),
            span(a.y, b.y),
        )
    }

    /// Square anchored at the top-left of the two corners, with side equal to
    /// the larger of the two axis deltas.
    pub fn square_from_corners(a: IntPoint, b: IntPoint) -> Self {
        let side = span(a.x, b.x).max(span(a.y, b.y));
        Self::new(a.x.min(b.x), a.y.min(b.y), side, side)
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    pub fn contains(&self, p: Point) -> bool {
        if self.width < 0 || self.height < 0 {
            return false;
        }
        let rect = self.as_rect();
        p.x >= rect.x0 && p.y >= rect.y0 && p.x < rect.x1 && p.y < rect.y1
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(PATH_TOLERANCE)
    }

    /// Closed corner ring starting at the minimum corner.
    pub fn closed_ring(&self) -> Vec<Point> {
        let r = self.as_rect();
        vec![
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
            Point::new(r.x0, r.y0),
        ]
    }
}

/// Bounding frame of an ellipse or arc.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            width,
            height,
        }
    }

    /// Frame spanned by two opposite corners.
    pub fn from_corners(a: IntPoint, b: IntPoint) -> Self {
        let r = IntRect::from_corners(a, b);
        Self::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.width),
            f64::from(r.height),
        )
    }

    /// Circle frame centred on `center` whose radius is the truncated distance
    /// to `edge`.
    pub fn circle_through(center: IntPoint, edge: IntPoint) -> Self {
        let radius = f64::from(center.distance(edge.to_point()) as i32);
        Self::new(
            f64::from(center.x) - radius,
            f64::from(center.y) - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Normalized offset of `p` from the frame center, in units of the frame size.
    fn normalized(&self, p: Point) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((
            (p.x - self.position.x) / self.width - 0.5,
            (p.y - self.position.y) / self.height - 0.5,
        ))
    }

    /// Strict interior test of the inscribed ellipse.
    pub fn ellipse_contains(&self, p: Point) -> bool {
        self.normalized(p)
            .is_some_and(|(nx, ny)| nx * nx + ny * ny < 0.25)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position.x += f64::from(dx);
        self.position.y += f64::from(dy);
    }

    pub fn ellipse_path(&self) -> BezPath {
        Ellipse::from_rect(self.as_rect()).to_path(PATH_TOLERANCE)
    }

    /// Closed polygon approximating the inscribed ellipse with `segments` samples.
    pub fn ellipse_ring(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(3);
        let c = self.center();
        let (a, b) = (self.width / 2.0, self.height / 2.0);
        let mut ring: Vec<Point> = (0..segments)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / segments as f64;
                Point::new(c.x + a * theta.cos(), c.y + b * theta.sin())
            })
            .collect();
        ring.push(ring[0]);
        ring
    }
}

/// Segment between two lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: IntPoint,
    pub end: IntPoint,
}

impl Segment {
    pub fn new(start: IntPoint, end: IntPoint) -> Self {
        Self { start, end }
    }

    /// Perpendicular distance from `p` to the infinite line through the segment.
    ///
    /// The projection is not clamped to the segment. A degenerate segment has no
    /// line, so every point is infinitely far from it.
    pub fn line_distance(&self, p: Point) -> f64 {
        let (x1, y1) = (f64::from(self.start.x), f64::from(self.start.y));
        let (x2, y2) = (f64::from(self.end.x), f64::from(self.end.y));
        let a = y2 - y1;
        let b = x1 - x2;
        let c = x2 * y1 - x1 * y2;
        let norm = (a * a + b * b).sqrt();
        if norm == 0.0 {
            return f64::INFINITY;
        }
        (a * p.x + b * p.y + c).abs() / norm
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start.translate(dx, dy);
        self.end.translate(dx, dy);
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start.to_point());
        path.line_to(self.end.to_point());
        path
    }
}

/// A vertex list too short to close a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a ring needs at least {} vertices, found {found}", Ring::MIN_VERTICES)]
pub struct RingError {
    pub found: usize,
}

/// Closed vertex ring with at least three vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<IntPoint>", into = "Vec<IntPoint>")]
pub struct Ring {
    vertices: Vec<IntPoint>,
}

impl Ring {
    /// Minimum number of vertices in a ring.
    pub const MIN_VERTICES: usize = 3;

    /// Build a ring, or `None` when fewer than three vertices are given.
    pub fn new(vertices: Vec<IntPoint>) -> Option<Self> {
        (vertices.len() >= Self::MIN_VERTICES).then_some(Self { vertices })
    }

    pub fn vertices(&self) -> &[IntPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of the vertices in model space.
    pub fn bounds(&self) -> Rect {
        self.vertices
            .iter()
            .map(|v| Rect::from_points(v.to_point(), v.to_point()))
            .reduce(|acc, r| acc.union(r))
            .unwrap_or_default()
    }

    /// Even-odd containment with half-open edge rules.
    ///
    /// Edges to the right of the point that straddle its y are counted; edges
    /// are half-open in y so a vertex shared by two edges is counted once.
    pub fn contains(&self, p: Point) -> bool {
        let bounds = self.bounds();
        if p.x < bounds.x0 || p.y < bounds.y0 || p.x >= bounds.x1 || p.y >= bounds.y1 {
            return false;
        }
        let (x, y) = (p.x, p.y);
        let mut hits = 0usize;
        let mut last = self.vertices[self.vertices.len() - 1].to_point();
        for v in &self.vertices {
            let cur = v.to_point();
            let prev = last;
            last = cur;
            if cur.y == prev.y {
                continue;
            }
            let left_x = if cur.x < prev.x {
                if x >= prev.x {
                    continue;
                }
                cur.x
            } else {
                if x >= cur.x {
                    continue;
                }
                prev.x
            };
            let (test1, test2) = if cur.y < prev.y {
                if y < cur.y || y >= prev.y {
                    continue;
                }
                if x < left_x {
                    hits += 1;
                    continue;
                }
                (x - cur.x, y - cur.y)
            } else {
                if y < prev.y || y >= cur.y {
                    continue;
                }
                if x < left_x {
                    hits += 1;
                    continue;
                }
                (x - prev.x, y - prev.y)
            };
            if test1 < test2 / (prev.y - cur.y) * (prev.x - cur.x) {
                hits += 1;
            }
        }
        hits % 2 == 1
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        for v in &mut self.vertices {
            v.translate(dx, dy);
        }
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = polyline_path(self.vertices.iter().map(|v| v.to_point()));
        path.close_path();
        path
    }

    /// Vertices with the first one repeated at the end.
    pub fn closed_ring(&self) -> Vec<Point> {
        let mut ring: Vec<Point> = self.vertices.iter().map(|v| v.to_point()).collect();
        ring.push(ring[0]);
        ring
    }
}

impl TryFrom<Vec<IntPoint>> for Ring {
    type Error = RingError;

    fn try_from(vertices: Vec<IntPoint>) -> Result<Self, Self::Error> {
        let found = vertices.len();
        Ring::new(vertices).ok_or(RingError { found })
    }
}

impl From<Ring> for Vec<IntPoint> {
    fn from(ring: Ring) -> Self {
        ring.vertices
    }
}

/// Open polyline through `points`.
pub fn polyline_path(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// How the ends of an arc are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArcClosure {
    /// Ends are not joined.
    #[default]
    Open,
    /// Ends are joined by a straight chord.
    Chord,
    /// Ends are joined to the center.
    Pie,
}

impl ArcClosure {
    /// Numeric code used in canonical lines.
    pub fn code(self) -> i64 {
        match self {
            ArcClosure::Open => 0,
            ArcClosure::Chord => 1,
            ArcClosure::Pie => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ArcClosure::Open),
            1 => Some(ArcClosure::Chord),
            2 => Some(ArcClosure::Pie),
            _ => None,
        }
    }
}

/// Elliptical arc inscribed in a frame.
///
/// Angles are in degrees, counter-clockwise as seen on screen (y grows downward),
/// with zero pointing along +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub frame: Frame,
    pub start_degrees: f64,
    pub extent_degrees: f64,
    pub closure: ArcClosure,
}

impl ArcSpec {
    /// Start angle of every arc drawn in the editor.
    pub const DEFAULT_START: f64 = 0.0;
    /// Extent of every arc drawn in the editor.
    pub const DEFAULT_EXTENT: f64 = 180.0;

    pub fn new(frame: Frame, start_degrees: f64, extent_degrees: f64, closure: ArcClosure) -> Self {
        Self {
            frame,
            start_degrees,
            extent_degrees,
            closure,
        }
    }

    /// Open upper half of the frame's ellipse.
    pub fn upper_half(frame: Frame) -> Self {
        Self::new(
            frame,
            Self::DEFAULT_START,
            Self::DEFAULT_EXTENT,
            ArcClosure::Open,
        )
    }

    /// Whether `angle` (degrees) falls within `[start, start + extent)`.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let backwards = self.extent_degrees < 0.0;
        let extent = self.extent_degrees.abs();
        if extent >= 360.0 {
            return true;
        }
        let mut rel = normalize_degrees(angle) - normalize_degrees(self.start_degrees);
        if backwards {
            rel = -rel;
        }
        if rel < 0.0 {
            rel += 360.0;
        }
        rel >= 0.0 && rel < extent
    }

    /// Area containment. Open and chord arcs cover the region between the arc
    /// and its chord; pie arcs cover the wedge.
    pub fn contains(&self, p: Point) -> bool {
        let Some((nx, ny)) = self.frame.normalized(p) else {
            return false;
        };
        if nx * nx + ny * ny >= 0.25 {
            return false;
        }
        let extent = self.extent_degrees.abs();
        if extent >= 360.0 {
            return true;
        }
        let in_arc = self.contains_angle((-ny.atan2(nx)).to_degrees());
        if self.closure == ArcClosure::Pie {
            return in_arc;
        }
        if in_arc {
            if extent >= 180.0 {
                return true;
            }
        } else if extent <= 180.0 {
            return false;
        }
        // Inside the wedge triangle iff on the same side of the chord as the center.
        let a1 = (-self.start_degrees).to_radians();
        let a2 = a1 + (-self.extent_degrees).to_radians();
        let (x1, y1) = (a1.cos(), a1.sin());
        let (x2, y2) = (a2.cos(), a2.sin());
        let inside = relative_ccw(x1, y1, x2, y2, 2.0 * nx, 2.0 * ny)
            * relative_ccw(x1, y1, x2, y2, 0.0, 0.0)
            >= 0;
        if in_arc { !inside } else { inside }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.frame.translate(dx, dy);
    }

    fn kurbo_arc(&self) -> Arc {
        Arc {
            center: self.frame.center(),
            radii: Vec2::new(self.frame.width / 2.0, self.frame.height / 2.0),
            start_angle: -self.start_degrees.to_radians(),
            sweep_angle: -self.extent_degrees.to_radians(),
            x_rotation: 0.0,
        }
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = self.kurbo_arc().to_path(PATH_TOLERANCE);
        match self.closure {
            ArcClosure::Open => {}
            ArcClosure::Chord => path.close_path(),
            ArcClosure::Pie => {
                path.line_to(self.frame.center());
                path.close_path();
            }
        }
        path
    }

    /// Polyline of `segments + 1` samples from the start angle through the extent.
    pub fn samples(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let c = self.frame.center();
        let (a, b) = (self.frame.width / 2.0, self.frame.height / 2.0);
        let start = self.start_degrees.to_radians();
        let sweep = self.extent_degrees.to_radians();
        (0..=segments)
            .map(|i| {
                let theta = start + sweep * i as f64 / segments as f64;
                Point::new(c.x + a * theta.cos(), c.y - b * theta.sin())
            })
            .collect()
    }
}

/// Map an angle in degrees into `(-180, 180]`.
fn normalize_degrees(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Which side of the directed line `(x1, y1) -> (x2, y2)` the point lies on.
fn relative_ccw(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> i32 {
    let (x2, y2) = (x2 - x1, y2 - y1);
    let (mut px, mut py) = (px - x1, py - y1);
    let mut ccw = px * y2 - py * x2;
    if ccw == 0.0 {
        // Collinear: classify by projection onto the segment.
        ccw = px * x2 + py * y2;
        if ccw > 0.0 {
            px -= x2;
            py -= y2;
            ccw = px * x2 + py * y2;
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else if ccw > 0.0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_from_model_truncates_toward_zero() {
        assert_eq!(IntPoint::from_model(p(3.9, -2.7)), IntPoint::new(3, -2));
    }

    #[test]
    fn test_rect_from_corners() {
        let r = IntRect::from_corners(IntPoint::new(30, 40), IntPoint::new(10, 10));
        assert_eq!(r, IntRect::new(10, 10, 20, 30));
    }

    #[test]
    fn test_square_uses_larger_delta() {
        let r = IntRect::square_from_corners(IntPoint::new(10, 10), IntPoint::new(30, 40));
        assert_eq!(r, IntRect::new(10, 10, 30, 30));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = IntRect::new(0, 0, 10, 10);
        assert!(r.contains(p(0.0, 0.0)));
        assert!(r.contains(p(9.0, 9.0)));
        assert!(!r.contains(p(10.0, 5.0)));
        assert!(!r.contains(p(5.0, 10.0)));
        assert!(!IntRect::new(0, 0, 0, 0).contains(p(0.0, 0.0)));
    }

    #[test]
    fn test_ellipse_contains() {
        let f = Frame::new(0.0, 0.0, 20.0, 10.0);
        assert!(f.ellipse_contains(p(10.0, 5.0)));
        assert!(f.ellipse_contains(p(19.0, 5.0)));
        assert!(!f.ellipse_contains(p(20.0, 5.0)));
        assert!(!f.ellipse_contains(p(1.0, 1.0)));
        assert!(!Frame::new(0.0, 0.0, 0.0, 10.0).ellipse_contains(p(0.0, 5.0)));
    }

    #[test]
    fn test_circle_through_truncates_radius() {
        let f = Frame::circle_through(IntPoint::new(0, 0), IntPoint::new(3, 4));
        assert_eq!(f, Frame::new(-5.0, -5.0, 10.0, 10.0));
        let f = Frame::circle_through(IntPoint::new(0, 0), IntPoint::new(1, 1));
        assert!((f.width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_distance_ignores_segment_bounds() {
        let s = Segment::new(IntPoint::new(0, 0), IntPoint::new(100, 0));
        assert!((s.line_distance(p(50.0, 3.0)) - 3.0).abs() < f64::EPSILON);
        assert!((s.line_distance(p(200.0, 3.0)) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_segment_is_never_near() {
        let s = Segment::new(IntPoint::new(5, 5), IntPoint::new(5, 5));
        assert!(s.line_distance(p(5.0, 5.0)).is_infinite());
    }

    #[test]
    fn test_ring_requires_three_vertices() {
        assert!(Ring::new(vec![IntPoint::new(0, 0), IntPoint::new(1, 1)]).is_none());
    }

    #[test]
    fn test_ring_deserialize_rejects_short_vertex_list() {
        let err = serde_json::from_str::<Ring>(r#"[{"x":0,"y":0},{"x":1,"y":1}]"#);
        assert!(err.is_err());
        assert!(serde_json::from_str::<Ring>("[]").is_err());

        let ring: Ring =
            serde_json::from_str(r#"[{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":4}]"#).unwrap();
        assert_eq!(ring.len(), 3);
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(serde_json::from_str::<Ring>(&json).unwrap(), ring);
    }

    #[test]
    fn test_corner_spans_saturate_at_lattice_limits() {
        let a = IntPoint::new(i32::MIN, 0);
        let b = IntPoint::new(i32::MAX, 10);
        let r = IntRect::from_corners(a, b);
        assert_eq!(r, IntRect::new(i32::MIN, 0, i32::MAX, 10));
        let s = IntRect::square_from_corners(a, b);
        assert_eq!(s.width, i32::MAX);
        assert_eq!(s.height, i32::MAX);
    }

    #[test]
    fn test_ring_bounds_span_full_lattice() {
        let ring = Ring::new(vec![
            IntPoint::new(i32::MIN, 0),
            IntPoint::new(i32::MAX, 0),
            IntPoint::new(0, 5),
        ])
        .unwrap();
        let bounds = ring.bounds();
        assert!((bounds.x0 - f64::from(i32::MIN)).abs() < f64::EPSILON);
        assert!((bounds.x1 - f64::from(i32::MAX)).abs() < f64::EPSILON);
        assert!(ring.contains(p(0.0, 1.0)));
        assert!(!ring.contains(p(0.0, 6.0)));
    }

    #[test]
    fn test_ring_contains() {
        let tri = Ring::new(vec![
            IntPoint::new(0, 0),
            IntPoint::new(10, 0),
            IntPoint::new(0, 10),
        ])
        .unwrap();
        assert!(tri.contains(p(2.0, 2.0)));
        assert!(!tri.contains(p(8.0, 8.0)));
        assert!(!tri.contains(p(-1.0, 2.0)));

        // Concave "U" shape: the notch is outside.
        let u = Ring::new(vec![
            IntPoint::new(0, 0),
            IntPoint::new(30, 0),
            IntPoint::new(30, 30),
            IntPoint::new(20, 30),
            IntPoint::new(20, 10),
            IntPoint::new(10, 10),
            IntPoint::new(10, 30),
            IntPoint::new(0, 30),
        ])
        .unwrap();
        assert!(u.contains(p(5.0, 20.0)));
        assert!(u.contains(p(25.0, 20.0)));
        assert!(!u.contains(p(15.0, 20.0)));
        assert!(u.contains(p(15.0, 5.0)));
    }

    #[test]
    fn test_ring_closed_ring_repeats_first_vertex() {
        let ring = Ring::new(vec![
            IntPoint::new(0, 0),
            IntPoint::new(4, 0),
            IntPoint::new(4, 4),
        ])
        .unwrap();
        let closed = ring.closed_ring();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[0], closed[3]);
    }

    #[test]
    fn test_upper_half_arc_contains() {
        let arc = ArcSpec::upper_half(Frame::new(0.0, 0.0, 20.0, 20.0));
        // Above the horizontal diameter is inside.
        assert!(arc.contains(p(10.0, 5.0)));
        // Below it is outside.
        assert!(!arc.contains(p(10.0, 15.0)));
        // Outside the ellipse entirely.
        assert!(!arc.contains(p(0.0, 0.0)));
    }

    #[test]
    fn test_pie_arc_quarter() {
        let arc = ArcSpec::new(Frame::new(0.0, 0.0, 20.0, 20.0), 0.0, 90.0, ArcClosure::Pie);
        // Upper-right quadrant.
        assert!(arc.contains(p(14.0, 6.0)));
        assert!(!arc.contains(p(6.0, 6.0)));
    }

    #[test]
    fn test_chord_arc_quarter_excludes_triangle() {
        let arc = ArcSpec::new(Frame::new(0.0, 0.0, 20.0, 20.0), 0.0, 90.0, ArcClosure::Chord);
        // Near the rim in the upper-right quadrant, beyond the chord.
        assert!(arc.contains(p(16.0, 4.0)));
        // Inside the wedge triangle near the center.
        assert!(!arc.contains(p(11.0, 9.0)));
    }

    #[test]
    fn test_arc_samples_span_extent() {
        let arc = ArcSpec::upper_half(Frame::new(0.0, 0.0, 20.0, 10.0));
        let samples = arc.samples(50);
        assert_eq!(samples.len(), 51);
        assert!((samples[0].x - 20.0).abs() < 1e-9);
        assert!((samples[50].x - 0.0).abs() < 1e-9);
        assert!((samples[25].y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_codes() {
        for closure in [ArcClosure::Open, ArcClosure::Chord, ArcClosure::Pie] {
            assert_eq!(ArcClosure::from_code(closure.code()), Some(closure));
        }
        assert_eq!(ArcClosure::from_code(7), None);
    }
}
