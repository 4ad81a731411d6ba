//! Two-click construction shared by Line, Rectangle, Square, Ellipse, Circle and Arc.

use super::{corner_pairs, CoordinateError, InteractionState, ShapeManager};
use crate::geometry::IntPoint;
use crate::input::MouseButton;
use crate::shapes::{Shape, ShapeKind};
use crate::store::ShapeStore;
use kurbo::BezPath;
use std::marker::PhantomData;

/// How a two-click kind turns its anchor and second click into a shape.
pub trait AnchoredShape {
    const KIND: ShapeKind;

    /// Whether clearing the selection also drops a pending anchor.
    const SELECTION_RESET_CLEARS_ANCHOR: bool = false;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape;

    /// Bulk construction. Each consecutive pair of points acts as the two clicks.
    fn from_points(points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        Ok(corner_pairs(Self::KIND, points)?
            .into_iter()
            .map(|(anchor, end)| Self::build(anchor, end))
            .collect())
    }
}

/// Manager for a kind built from an anchor click and a completing click.
#[derive(Debug, Clone)]
pub struct AnchoredManager<S> {
    state: InteractionState,
    store: ShapeStore,
    anchor: Option<IntPoint>,
    _shape: PhantomData<S>,
}

impl<S: AnchoredShape> AnchoredManager<S> {
    pub fn new() -> Self {
        Self {
            state: InteractionState::default(),
            store: ShapeStore::new(),
            anchor: None,
            _shape: PhantomData,
        }
    }

    /// Pending anchor of an unfinished gesture.
    pub fn anchor(&self) -> Option<IntPoint> {
        self.anchor
    }
}

impl<S: AnchoredShape> Default for AnchoredManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AnchoredShape> ShapeManager for AnchoredManager<S> {
    fn kind(&self) -> ShapeKind {
        S::KIND
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
        self.anchor.is_some()
    }

    fn reset_drawing(&mut self) {
        self.anchor = None;
    }

    fn reset_selection(&mut self) {
        self.store.clear_selection();
        if S::SELECTION_RESET_CLEARS_ANCHOR {
            self.anchor = None;
        }
    }

    fn create_click(&mut self, at: IntPoint, _button: MouseButton) {
        match self.anchor.take() {
            None => self.anchor = Some(at),
            Some(anchor) => {
                let shape = S::build(anchor, at);
                log::debug!("Committed {:?}", shape);
                self.store.push(shape);
            }
        }
    }

    fn shapes_from_points(&self, points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        S::from_points(points)
    }

    fn preview_path(&self, cursor: IntPoint) -> Option<BezPath> {
        self.anchor.map(|anchor| S::build(anchor, cursor).to_path(0.0))
    }
}
