use super::{CoordinateError, InteractionState, ShapeManager};
use crate::geometry::{IntPoint, PATH_TOLERANCE};
use crate::input::MouseButton;
use crate::render::{DrawSurface, Palette};
use crate::shapes::{Shape, ShapeKind};
use crate::store::ShapeStore;
use kurbo::{BezPath, Circle, Shape as KurboShape};

/// Manager for single points. Every Create click commits a point.
#[derive(Debug, Clone, Default)]
pub struct PointManager {
    state: InteractionState,
    store: ShapeStore,
}

impl PointManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeManager for PointManager {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn state(&self) -> &InteractionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    fn store(&self) -> &ShapeStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    fn has_pending(&self) -> bool {
        false
    }

    fn reset_drawing(&mut self) {}

    fn create_click(&mut self, at: IntPoint, _button: MouseButton) {
        log::debug!("Committed point at {:?}", at);
        self.store.push(Shape::Point(at));
    }

    fn shapes_from_points(&self, points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        Ok(points.iter().copied().map(Shape::Point).collect())
    }

    fn preview_path(&self, _cursor: IntPoint) -> Option<BezPath> {
        None
    }

    /// Filled markers for every point, plus a ring around each selected one.
    fn render(&self, surface: &mut dyn DrawSurface, palette: &Palette) {
        for shape in self.store.iter() {
            surface.fill(&shape.to_path(palette.point_marker_radius), palette.committed);
        }
        for shape in self.store.selected() {
            if let Shape::Point(p) = shape {
                let ring = Circle::new(p.to_point(), palette.selection_ring_radius)
                    .to_path(PATH_TOLERANCE);
                surface.stroke(&ring, palette.selected, palette.stroke_width);
            }
        }
    }
}
