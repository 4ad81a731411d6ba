//! Canonical one-line-per-shape text encoding.
//!
//! A line is the shape tag, a comma, then a space-separated parameter blob:
//!
//! ```text
//! Point,(x y)
//! Line,(x1 y1) (x2 y2)
//! Polygon,(x1 y1) (x2 y2) ... (xn yn)
//! Triangle,(x1 y1) (x2 y2) (x3 y3)
//! Rectangle,x y width height
//! Square,x y side
//! Circle,x y diameter
//! Ellipse,x y width height
//! Arc,x y width height start extent closure
//! ```
//!
//! Every kind except Point and Line writes a trailing space before the newline.
//! Lattice kinds accept fractional input and truncate it toward zero.

use crate::geometry::{ArcClosure, ArcSpec, Frame, IntPoint, IntRect, Ring, Segment};
use crate::shapes::{Shape, ShapeKind};
use thiserror::Error;

/// Errors produced while decoding a canonical line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("missing ',' between shape tag and parameters")]
    MissingSeparator,
    #[error("unknown shape tag: {0}")]
    UnknownKind(String),
    #[error("{kind} expects {expected} fields, found {found}")]
    FieldCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} expects {expected} points, found {found}")]
    PointCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} needs at least {minimum} points, found {found}")]
    TooFewPoints {
        kind: ShapeKind,
        minimum: usize,
        found: usize,
    },
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("malformed point: ({0})")]
    MalformedPoint(String),
    #[error("unexpected text: {0}")]
    UnexpectedToken(String),
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("invalid arc closure code: {0}")]
    InvalidClosure(i64),
}

/// Encode one shape as a newline-terminated canonical line.
pub fn encode(shape: &Shape) -> String {
    let params = match shape {
        Shape::Point(p) => format!("({} {})", p.x, p.y),
        Shape::Line(s) => format!("({} {}) ({} {})", s.start.x, s.start.y, s.end.x, s.end.y),
        Shape::Polygon(r) | Shape::Triangle(r) => r
            .vertices()
            .iter()
            .map(|v| format!("({} {}) ", v.x, v.y))
            .collect(),
        Shape::Rectangle(r) => format!("{} {} {} {} ", r.x, r.y, r.width, r.height),
        Shape::Square(r) => format!("{} {} {} ", r.x, r.y, r.width),
        Shape::Circle(f) => format!("{} {} {} ", f.position.x, f.position.y, f.width),
        Shape::Ellipse(f) => format!(
            "{} {} {} {} ",
            f.position.x, f.position.y, f.width, f.height
        ),
        Shape::Arc(a) => format!(
            "{} {} {} {} {} {} {} ",
            a.frame.position.x,
            a.frame.position.y,
            a.frame.width,
            a.frame.height,
            a.start_degrees,
            a.extent_degrees,
            a.closure.code()
        ),
    };
    format!("{},{}\n", shape.kind().tag(), params)
}

/// Encode a sequence of shapes, one line each.
pub fn encode_all<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> String {
    shapes.into_iter().map(encode).collect()
}

/// Decode one canonical line. Surrounding whitespace is ignored.
pub fn decode(line: &str) -> Result<Shape, CodecError> {
    let (tag, body) = line
        .trim()
        .split_once(',')
        .ok_or(CodecError::MissingSeparator)?;
    let kind: ShapeKind = tag.trim().parse()?;

    let shape = match kind {
        ShapeKind::Point => {
            let [p] = exact_points::<1>(kind, body)?;
            Shape::Point(p)
        }
        ShapeKind::Line => {
            let [a, b] = exact_points::<2>(kind, body)?;
            Shape::Line(Segment::new(a, b))
        }
        ShapeKind::Triangle => {
            let vertices = exact_points::<3>(kind, body)?;
            Shape::Triangle(ring(kind, vertices.to_vec())?)
        }
        ShapeKind::Polygon => Shape::Polygon(ring(kind, parse_points(body)?)?),
        ShapeKind::Rectangle => {
            let [x, y, w, h] = exact_fields::<4>(kind, body)?;
            Shape::Rectangle(IntRect::new(
                lattice(x),
                lattice(y),
                lattice(w),
                lattice(h),
            ))
        }
        ShapeKind::Square => {
            let [x, y, side] = exact_fields::<3>(kind, body)?;
            let side = lattice(side);
            Shape::Square(IntRect::new(lattice(x), lattice(y), side, side))
        }
        ShapeKind::Circle => {
            let [x, y, d] = exact_fields::<3>(kind, body)?;
            Shape::Circle(Frame::new(x, y, d, d))
        }
        ShapeKind::Ellipse => {
            let [x, y, w, h] = exact_fields::<4>(kind, body)?;
            Shape::Ellipse(Frame::new(x, y, w, h))
        }
        ShapeKind::Arc => {
            let tokens: Vec<&str> = body.split_whitespace().collect();
            if tokens.len() != 7 {
                return Err(CodecError::FieldCount {
                    kind,
                    expected: 7,
                    found: tokens.len(),
                });
            }
            let x = parse_number(tokens[0])?;
            let y = parse_number(tokens[1])?;
            let w = parse_number(tokens[2])?;
            let h = parse_number(tokens[3])?;
            let start = parse_number(tokens[4])?;
            let extent = parse_number(tokens[5])?;
            let code: i64 = tokens[6]
                .parse()
                .map_err(|_| CodecError::InvalidNumber(tokens[6].to_string()))?;
            let closure = ArcClosure::from_code(code).ok_or(CodecError::InvalidClosure(code))?;
            Shape::Arc(ArcSpec::new(Frame::new(x, y, w, h), start, extent, closure))
        }
    };
    Ok(shape)
}

/// Truncate toward zero onto the integer lattice.
fn lattice(v: f64) -> i32 {
    v as i32
}

fn parse_number(token: &str) -> Result<f64, CodecError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CodecError::InvalidNumber(token.to_string()))
}

fn exact_fields<const N: usize>(kind: ShapeKind, body: &str) -> Result<[f64; N], CodecError> {
    let values = body
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    let found = values.len();
    values.try_into().map_err(|_| CodecError::FieldCount {
        kind,
        expected: N,
        found,
    })
}

/// Parse a run of `(x y)` pairs separated by whitespace.
fn parse_points(body: &str) -> Result<Vec<IntPoint>, CodecError> {
    let mut points = Vec::new();
    let mut rest = body.trim_start();
    while !rest.is_empty() {
        let Some(open) = rest.strip_prefix('(') else {
            let token = rest.split_whitespace().next().unwrap_or(rest);
            return Err(CodecError::UnexpectedToken(token.to_string()));
        };
        let close = open.find(')').ok_or(CodecError::UnbalancedParenthesis)?;
        let inner = &open[..close];
        if inner.contains('(') {
            return Err(CodecError::UnbalancedParenthesis);
        }
        let coords: Vec<&str> = inner.split_whitespace().collect();
        let [x, y] = coords.as_slice() else {
            return Err(CodecError::MalformedPoint(inner.trim().to_string()));
        };
        points.push(IntPoint::new(
            lattice(parse_number(x)?),
            lattice(parse_number(y)?),
        ));
        rest = open[close + 1..].trim_start();
    }
    Ok(points)
}

fn exact_points<const N: usize>(kind: ShapeKind, body: &str) -> Result<[IntPoint; N], CodecError> {
    let points = parse_points(body)?;
    let found = points.len();
    points.try_into().map_err(|_| CodecError::PointCount {
        kind,
        expected: N,
        found,
    })
}

fn ring(kind: ShapeKind, vertices: Vec<IntPoint>) -> Result<Ring, CodecError> {
    let found = vertices.len();
    Ring::new(vertices).ok_or(CodecError::TooFewPoints {
        kind,
        minimum: Ring::MIN_VERTICES,
        found,
    })
}
