//! Vertex-accumulating construction shared by Polygon and Triangle.

use super::{CoordinateError, InteractionState, ShapeManager};
use crate::geometry::{polyline_path, IntPoint, Ring};
use crate::input::MouseButton;
use crate::shapes::{Shape, ShapeKind};
use crate::store::ShapeStore;
use kurbo::BezPath;
use std::marker::PhantomData;

/// What happens after a Create click appended its vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStep {
    /// Keep collecting vertices.
    Continue,
    /// Commit the ring if it is valid, then clear the pending vertices.
    Close,
}

/// Rules for a ring kind built one vertex per click.
pub trait VertexRule {
    const KIND: ShapeKind;

    /// Decide after a click with `button` left `pending` vertices.
    fn step(pending: usize, button: MouseButton) -> VertexStep;

    fn wrap(ring: Ring) -> Shape;

    /// Bulk construction: the whole point list is one ring.
    fn from_points(points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        let ring = Ring::new(points.to_vec()).ok_or(CoordinateError::TooFewPoints {
            kind: Self::KIND,
            minimum: Ring::MIN_VERTICES,
            found: points.len(),
        })?;
        Ok(vec![Self::wrap(ring)])
    }
}

/// Manager for a ring kind built by clicking its vertices.
#[derive(Debug, Clone)]
pub struct VertexManager<R> {
    state: InteractionState,
    store: ShapeStore,
    pending: Vec<IntPoint>,
    _rule: PhantomData<R>,
}

impl<R: VertexRule> VertexManager<R> {
    pub fn new() -> Self {
        Self {
            state: InteractionState::default(),
            store: ShapeStore::new(),
            pending: Vec::new(),
            _rule: PhantomData,
        }
    }

    /// Vertices of the unfinished ring.
    pub fn pending(&self) -> &[IntPoint] {
        &self.pending
    }
}

impl<R: VertexRule> Default for VertexManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: VertexRule> ShapeManager for VertexManager<R> {
    fn kind(&self) -> ShapeKind {
        R::KIND
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
        !self.pending.is_empty()
    }

    fn reset_drawing(&mut self) {
        self.pending.clear();
    }

    fn create_click(&mut self, at: IntPoint, button: MouseButton) {
        self.pending.push(at);
        if R::step(self.pending.len(), button) == VertexStep::Continue {
            return;
        }
        let vertices = std::mem::take(&mut self.pending);
        let count = vertices.len();
        match Ring::new(vertices) {
            Some(ring) => {
                log::debug!("Committed {} with {} vertices", R::KIND, count);
                self.store.push(R::wrap(ring));
            }
            None => log::trace!("Discarded {} with {} vertices", R::KIND, count),
        }
    }

    fn shapes_from_points(&self, points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        R::from_points(points)
    }

    /// Open polyline through the pending vertices and the cursor.
    fn preview_path(&self, cursor: IntPoint) -> Option<BezPath> {
        if self.pending.is_empty() {
            return None;
        }
        Some(polyline_path(
            self.pending
                .iter()
                .chain(std::iter::once(&cursor))
                .map(|v| v.to_point()),
        ))
    }
}
