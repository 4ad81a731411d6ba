//! Drawing surface abstraction.
//!
//! Managers draw in model space. The caller owns the view transform and applies
//! it around the whole pass; see `shapepad-render` for implementations.

use kurbo::BezPath;
use peniko::Color;

/// A 2-D surface shapes can be stroked and filled onto.
pub trait DrawSurface {
    /// Stroke a path with the given color and line width.
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill a path with the given color (non-zero winding).
    fn fill(&mut self, path: &BezPath, color: Color);
}

/// Colors and marker sizes resolved for a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Committed, unselected shapes.
    pub committed: Color,
    pub selected: Color,
    /// Shape under construction.
    pub preview: Color,
    pub stroke_width: f64,
    pub point_marker_radius: f64,
    pub selection_ring_radius: f64,
}

impl Default for Palette {
    fn default() -> Self {
        crate::settings::EditorSettings::default().palette()
    }
}
