//! Camera module for pan/zoom transforms.
//!
//! Managers never see the camera. The shell maps pointer positions through
//! [`Camera::screen_to_world`] before building events, and the render pass
//! applies [`Camera::transform`] once around every manager.

use crate::geometry::IntPoint;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom reachable with the wheel.
pub const MIN_ZOOM: f64 = 0.1;

/// Camera manages the view transform for the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen units.
    pub offset: Vec2,
    /// Current scale factor.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// World-to-screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Screen-to-world transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Screen point mapped to world space and truncated onto the integer lattice.
    pub fn screen_to_lattice(&self, screen_point: Point) -> IntPoint {
        IntPoint::from_model(self.screen_to_world(screen_point))
    }

    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Apply `rotation` wheel notches, keeping `screen_point` fixed.
    ///
    /// Positive rotation (scrolling towards the user) zooms out.
    pub fn zoom_step(&mut self, screen_point: Point, rotation: f64) {
        let new_zoom = (self.zoom - ZOOM_STEP * rotation).max(MIN_ZOOM);
        let factor = new_zoom / self.zoom;
        self.offset.x += (1.0 - factor) * (screen_point.x - self.offset.x);
        self.offset.y += (1.0 - factor) * (screen_point.y - self.offset.y);
        self.zoom = new_zoom;
    }

    /// Reset camera to identity.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fit `bounds` into `viewport`, padding each side by `padding_factor`
    /// of the bounds' own size.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport: Size, padding_factor: f64) {
        if bounds.is_zero_area() {
            self.reset();
            return;
        }

        let padded = Size::new(
            bounds.width() * (1.0 + 2.0 * padding_factor),
            bounds.height() * (1.0 + 2.0 * padding_factor),
        );
        self.zoom = (viewport.width / padded.width)
            .min(viewport.height / padded.height)
            .max(MIN_ZOOM);

        let bounds_center = bounds.center();
        self.offset = Vec2::new(
            viewport.width / 2.0 - bounds_center.x * self.zoom,
            viewport.height / 2.0 - bounds_center.y * self.zoom,
        );
    }
}
