//! Frame pass and the recording surface.

use kurbo::{Affine, BezPath};
use peniko::Color;
use shapepad_core::{Camera, DrawSurface, ShapeRegistry};

/// A drawing surface that carries a view transform.
///
/// Managers draw in model space; the surface maps what they draw through the
/// current transform.
pub trait FrameSurface: DrawSurface {
    fn transform(&self) -> Affine;

    fn set_transform(&mut self, transform: Affine);
}

/// One recorded drawing operation, in surface space.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
    },
    Fill {
        path: BezPath,
        color: Color,
    },
}

impl RecordedOp {
    pub fn path(&self) -> &BezPath {
        match self {
            RecordedOp::Stroke { path, .. } | RecordedOp::Fill { path, .. } => path,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RecordedOp::Stroke { color, .. } | RecordedOp::Fill { color, .. } => *color,
        }
    }

    pub fn is_stroke(&self) -> bool {
        matches!(self, RecordedOp::Stroke { .. })
    }
}

/// Headless surface that records every operation with its transform applied.
#[derive(Debug, Clone)]
pub struct DisplayList {
    ops: Vec<RecordedOp>,
    transform: Affine,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            transform: Affine::IDENTITY,
        }
    }

    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operations drawn in `color`.
    pub fn with_color(&self, color: Color) -> impl Iterator<Item = &RecordedOp> {
        self.ops.iter().filter(move |op| op.color() == color)
    }

    /// Drop recorded operations. The transform is kept.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for DisplayList {
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        self.ops.push(RecordedOp::Stroke {
            path: self.transform * path.clone(),
            color,
            width,
        });
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.ops.push(RecordedOp::Fill {
            path: self.transform * path.clone(),
            color,
        });
    }
}

impl FrameSurface for DisplayList {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }
}

/// Render every manager under the camera transform, restoring the surface's
/// previous transform afterwards.
pub fn render_frame<S: FrameSurface>(registry: &ShapeRegistry, camera: &Camera, surface: &mut S) {
    let previous = surface.transform();
    surface.set_transform(previous * camera.transform());
    registry.render(surface);
    surface.set_transform(previous);
    log::trace!(
        "Rendered frame at zoom {:.2}, offset ({:.1}, {:.1})",
        camera.zoom,
        camera.offset.x,
        camera.offset.y
    );
}
