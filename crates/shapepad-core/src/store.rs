//! Owned shape collection with an ordered, identity-based selection.

use crate::settings::HitTolerance;
use crate::shapes::Shape;
use kurbo::Point;
use uuid::Uuid;

/// Handle of a committed shape. Never serialized.
pub type ShapeId = Uuid;

#[derive(Debug, Clone)]
struct Entry {
    id: ShapeId,
    shape: Shape,
}

/// Committed shapes in insertion order plus the subset currently selected.
///
/// Selection membership is by handle, so two shapes with equal geometry are
/// still selected independently.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    entries: Vec<Entry>,
    selection: Vec<ShapeId>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commit a shape and return its handle.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let id = Uuid::new_v4();
        self.entries.push(Entry { id, shape });
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.shape)
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.entries.iter().map(|e| &e.shape)
    }

    /// Shapes in insertion order, each paired with its selection flag.
    pub fn iter_with_selection(&self) -> impl Iterator<Item = (&Shape, bool)> {
        self.entries
            .iter()
            .map(|e| (&e.shape, self.selection.contains(&e.id)))
    }

    /// Selected shapes in the order they were selected.
    pub fn selected(&self) -> impl Iterator<Item = &Shape> {
        self.selection.iter().filter_map(|id| self.get(*id))
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// First shape in insertion order hit by `point`.
    pub fn hit(&self, point: Point, tolerance: &HitTolerance) -> Option<ShapeId> {
        self.entries
            .iter()
            .find(|e| e.shape.hit_test(point, tolerance))
            .map(|e| e.id)
    }

    /// Flip selection membership of `id`. Returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: ShapeId) -> bool {
        if let Some(index) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(index);
            false
        } else {
            self.selection.push(id);
            true
        }
    }

    /// Remove a shape from the collection and the selection.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.selection.retain(|s| *s != id);
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).shape)
    }

    /// Translate every selected shape.
    pub fn translate_selected(&mut self, dx: i32, dy: i32) {
        for entry in &mut self.entries {
            if self.selection.contains(&entry.id) {
                entry.shape.translate(dx, dy);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Remove every shape and clear the selection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selection.clear();
    }
}
