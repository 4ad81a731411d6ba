//! Vello-backed drawing surface.

use crate::renderer::FrameSurface;
use kurbo::{Affine, BezPath, Stroke};
use peniko::{Color, Fill};
use shapepad_core::DrawSurface;
use vello::Scene;

/// Draws into a [`vello::Scene`] for GPU rendering.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    transform: Affine,
    /// Operations encoded since the last reset.
    op_count: usize,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
            op_count: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        log::trace!("Handing off scene with {} operations", self.op_count);
        self.op_count = 0;
        std::mem::replace(&mut self.scene, Scene::new())
    }

    /// Clear the scene for the next frame.
    pub fn reset(&mut self) {
        self.scene.reset();
        self.op_count = 0;
    }

    pub fn op_count(&self) -> usize {
        self.op_count
    }
}

impl DrawSurface for VelloSurface {
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene.stroke(&stroke, self.transform, color, None, path);
        self.op_count += 1;
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, path);
        self.op_count += 1;
    }
}

impl FrameSurface for VelloSurface {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_frame;
    use shapepad_core::{Camera, ShapeKind, ShapeRegistry};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_render_into_scene() {
        init_logging();
        let mut registry = ShapeRegistry::new();
        registry
            .add_from_coordinates(ShapeKind::Point, &[1.0, 2.0], &[1.0, 2.0])
            .unwrap();
        let mut surface = VelloSurface::new();
        render_frame(&registry, &Camera::new(), &mut surface);
        assert_eq!(surface.op_count(), 2);
        let _scene = surface.take_scene();
        assert_eq!(surface.op_count(), 0);
    }
}
