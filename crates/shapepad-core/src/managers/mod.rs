//! Per-kind shape managers.
//!
//! Every manager owns its committed shapes, its selection and whatever
//! construction state its Create gesture needs. The four-mode state machine
//! lives in the provided methods of [`ShapeManager`]; implementors supply only
//! the kind-specific pieces (the Create gesture, bulk construction and the
//! construction preview).

mod anchored;
mod arc;
mod ellipse;
mod line;
mod point;
mod polygon;
mod rectangle;
mod vertex;

pub use anchored::{AnchoredManager, AnchoredShape};
pub use arc::{ArcManager, ArcShape};
pub use ellipse::{CircleManager, CircleShape, EllipseManager, EllipseShape};
pub use line::{LineManager, LineShape};
pub use point::PointManager;
pub use polygon::{PolygonManager, PolygonRule, TriangleManager, TriangleRule};
pub use rectangle::{RectangleManager, RectangleShape, SquareManager, SquareShape};
pub use vertex::{VertexManager, VertexRule, VertexStep};

use crate::codec;
use crate::export::Geometry;
use crate::geometry::IntPoint;
use crate::input::MouseButton;
use crate::mode::InteractionMode;
use crate::render::{DrawSurface, Palette};
use crate::settings::{ExportResolution, HitTolerance};
use crate::shapes::{Shape, ShapeKind};
use crate::store::{ShapeId, ShapeStore};
use kurbo::{BezPath, Point};
use thiserror::Error;

/// Errors from bulk coordinate ingestion. Nothing is added when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate lists differ in length: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("coordinate {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("{kind} needs at least {minimum} points, found {found}")]
    TooFewPoints {
        kind: ShapeKind,
        minimum: usize,
        found: usize,
    },
    #[error("{kind} needs exactly {expected} points, found {found}")]
    PointCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} is built from pairs of corner points, found {found} points")]
    OddPointCount { kind: ShapeKind, found: usize },
}

/// Errors from inserting a parsed shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{found} shape cannot be added to the {expected} manager")]
    WrongKind { expected: ShapeKind, found: ShapeKind },
    #[error("{kind} needs exactly {expected} vertices, found {found}")]
    VertexCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} needs equal width and height")]
    UnequalSides { kind: ShapeKind },
}

/// Mode and pointer state threaded through a manager's handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub mode: InteractionMode,
    /// Last pointer position, used for construction previews.
    pub cursor: Option<IntPoint>,
    /// Previous drag sample while a Move gesture is in progress.
    pub drag_anchor: Option<IntPoint>,
}

/// Contract shared by the nine shape managers.
pub trait ShapeManager {
    fn kind(&self) -> ShapeKind;

    fn state(&self) -> &InteractionState;

    fn state_mut(&mut self) -> &mut InteractionState;

    fn store(&self) -> &ShapeStore;

    fn store_mut(&mut self) -> &mut ShapeStore;

    /// Whether an unfinished Create gesture exists.
    fn has_pending(&self) -> bool;

    /// Discard in-progress construction. Committed shapes and selection are kept.
    fn reset_drawing(&mut self);

    /// Handle one Create-mode click at a lattice point.
    fn create_click(&mut self, at: IntPoint, button: MouseButton);

    /// Build committed shapes from a lattice point list, or explain why not.
    fn shapes_from_points(&self, points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError>;

    /// Outline of the shape the next completing click at `cursor` would commit.
    fn preview_path(&self, cursor: IntPoint) -> Option<BezPath>;

    fn mode(&self) -> InteractionMode {
        self.state().mode
    }

    /// Switch mode. Leaving Create discards any pending construction.
    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode() == InteractionMode::Create && mode != InteractionMode::Create {
            self.reset_drawing();
        }
        self.state_mut().mode = mode;
    }

    fn reset_selection(&mut self) {
        self.store_mut().clear_selection();
    }

    /// Return to the freshly constructed state.
    fn new_frame(&mut self) {
        self.store_mut().clear();
        self.reset_drawing();
        *self.state_mut() = InteractionState::default();
    }

    fn set_mouse_position(&mut self, position: Point) {
        self.state_mut().cursor = Some(IntPoint::from_model(position));
    }

    /// Interpret a click according to the current mode.
    fn on_click(&mut self, position: Point, button: MouseButton, tolerance: &HitTolerance) {
        let at = IntPoint::from_model(position);
        match self.mode() {
            InteractionMode::Create => self.create_click(at, button),
            InteractionMode::Select => {
                if let Some(id) = self.store().hit(at.to_point(), tolerance) {
                    let selected = self.store_mut().toggle_selection(id);
                    log::trace!("{} {} at {:?}", self.kind(), if selected { "selected" } else { "deselected" }, at);
                }
            }
            InteractionMode::Delete => {
                if let Some(id) = self.store().hit(at.to_point(), tolerance) {
                    self.store_mut().remove(id);
                    log::debug!("Deleted {} at {:?}", self.kind(), at);
                }
            }
            InteractionMode::Move => {}
        }
    }

    /// Latch the drag anchor in Move mode.
    fn on_press(&mut self, position: Point) {
        if self.mode() == InteractionMode::Move {
            self.state_mut().drag_anchor = Some(IntPoint::from_model(position));
        }
    }

    fn on_release(&mut self) {
        if self.mode() == InteractionMode::Move {
            self.state_mut().drag_anchor = None;
        }
    }

    /// Translate the selection by the offset from the previous drag sample.
    fn on_drag(&mut self, position: Point) {
        if self.mode() != InteractionMode::Move {
            return;
        }
        let Some(anchor) = self.state().drag_anchor else {
            return;
        };
        let at = IntPoint::from_model(position);
        let (dx, dy) = anchor.delta_to(at);
        self.store_mut().translate_selected(dx, dy);
        self.state_mut().drag_anchor = Some(at);
    }

    /// Commit shapes built from parallel coordinate lists.
    ///
    /// Returns how many shapes were added. On error nothing is added.
    fn add_from_coordinates(&mut self, xs: &[f64], ys: &[f64]) -> Result<usize, CoordinateError> {
        let points = lattice_points(xs, ys)?;
        let shapes = self.shapes_from_points(&points)?;
        let count = shapes.len();
        for shape in shapes {
            self.store_mut().push(shape);
        }
        log::debug!("Added {} {} shape(s) from coordinates", count, self.kind());
        Ok(count)
    }

    /// Commit an already-built shape of this manager's kind.
    ///
    /// Triangles must have three vertices; squares and circles equal sides.
    fn insert(&mut self, shape: Shape) -> Result<ShapeId, ShapeError> {
        if shape.kind() != self.kind() {
            return Err(ShapeError::WrongKind {
                expected: self.kind(),
                found: shape.kind(),
            });
        }
        match &shape {
            Shape::Triangle(ring) if ring.len() != TriangleRule::VERTICES => {
                return Err(ShapeError::VertexCount {
                    kind: ShapeKind::Triangle,
                    expected: TriangleRule::VERTICES,
                    found: ring.len(),
                });
            }
            Shape::Square(r) if r.width != r.height => {
                return Err(ShapeError::UnequalSides {
                    kind: ShapeKind::Square,
                });
            }
            Shape::Circle(f) if f.width != f.height => {
                return Err(ShapeError::UnequalSides {
                    kind: ShapeKind::Circle,
                });
            }
            _ => {}
        }
        Ok(self.store_mut().push(shape))
    }

    /// Committed shapes in collection order.
    fn shapes(&self) -> Vec<Shape> {
        self.store().iter().cloned().collect()
    }

    /// Selected shapes in selection order.
    fn selected_shapes(&self) -> Vec<Shape> {
        self.store().selected().cloned().collect()
    }

    /// Stroke committed shapes, then the construction preview if any.
    fn render(&self, surface: &mut dyn DrawSurface, palette: &Palette) {
        for (shape, selected) in self.store().iter_with_selection() {
            let color = if selected {
                palette.selected
            } else {
                palette.committed
            };
            surface.stroke(
                &shape.to_path(palette.point_marker_radius),
                color,
                palette.stroke_width,
            );
        }
        if let Some(path) = self.state().cursor.and_then(|c| self.preview_path(c)) {
            surface.stroke(&path, palette.preview, palette.stroke_width);
        }
    }

    /// One canonical line per committed shape.
    fn to_serialized_lines(&self) -> String {
        codec::encode_all(self.store().iter())
    }

    /// Export geometries of committed shapes.
    fn geometries(&self, resolution: &ExportResolution) -> Vec<Geometry> {
        self.store()
            .iter()
            .map(|shape| shape.to_geometry(resolution))
            .collect()
    }
}

/// Zip parallel coordinate lists onto the integer lattice.
pub(crate) fn lattice_points(xs: &[f64], ys: &[f64]) -> Result<Vec<IntPoint>, CoordinateError> {
    if xs.len() != ys.len() {
        return Err(CoordinateError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(index, (&x, &y))| {
            if x.is_finite() && y.is_finite() {
                Ok(IntPoint::from_model(Point::new(x, y)))
            } else {
                Err(CoordinateError::NonFinite { index })
            }
        })
        .collect()
}

/// Split a point list into consecutive `(anchor, end)` click pairs.
pub(crate) fn corner_pairs(
    kind: ShapeKind,
    points: &[IntPoint],
) -> Result<Vec<(IntPoint, IntPoint)>, CoordinateError> {
    if points.len() < 2 {
        return Err(CoordinateError::TooFewPoints {
            kind,
            minimum: 2,
            found: points.len(),
        });
    }
    if points.len() % 2 != 0 {
        return Err(CoordinateError::OddPointCount {
            kind,
            found: points.len(),
        });
    }
    Ok(points.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}
