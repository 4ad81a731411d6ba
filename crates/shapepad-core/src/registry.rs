//! The nine managers plus the "current kind" and "current mode" routing state.

use crate::codec::{self, CodecError};
use crate::export::GeometryLayers;
use crate::input::PointerEvent;
use crate::managers::{
    ArcManager, CircleManager, CoordinateError, EllipseManager, LineManager, PointManager,
    PolygonManager, RectangleManager, ShapeError, ShapeManager, SquareManager, TriangleManager,
};
use crate::mode::InteractionMode;
use crate::render::DrawSurface;
use crate::settings::EditorSettings;
use crate::shapes::{Shape, ShapeKind};
use crate::store::ShapeId;

/// A canonical line that could not be imported.
#[derive(Debug, Clone, PartialEq)]
pub struct LineWarning {
    /// 1-based line number in the imported text.
    pub line_number: usize,
    pub text: String,
    pub error: CodecError,
}

/// Outcome of [`ShapeRegistry::import_lines`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub warnings: Vec<LineWarning>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Owns one manager per shape kind and routes events to the current one.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    point: PointManager,
    line: LineManager,
    polygon: PolygonManager,
    triangle: TriangleManager,
    rectangle: RectangleManager,
    square: SquareManager,
    circle: CircleManager,
    ellipse: EllipseManager,
    arc: ArcManager,
    current: Current,
    settings: EditorSettings,
}

#[derive(Debug, Clone, Copy)]
struct Current {
    kind: ShapeKind,
    mode: InteractionMode,
}

impl Default for Current {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            mode: InteractionMode::Create,
        }
    }
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.settings = settings;
    }

    pub fn current_kind(&self) -> ShapeKind {
        self.current.kind
    }

    pub fn mode(&self) -> InteractionMode {
        self.current.mode
    }

    pub fn manager(&self, kind: ShapeKind) -> &dyn ShapeManager {
        match kind {
            ShapeKind::Point => &self.point,
            ShapeKind::Line => &self.line,
            ShapeKind::Polygon => &self.polygon,
            ShapeKind::Triangle => &self.triangle,
            ShapeKind::Rectangle => &self.rectangle,
            ShapeKind::Square => &self.square,
            ShapeKind::Circle => &self.circle,
            ShapeKind::Ellipse => &self.ellipse,
            ShapeKind::Arc => &self.arc,
        }
    }

    pub fn manager_mut(&mut self, kind: ShapeKind) -> &mut dyn ShapeManager {
        match kind {
            ShapeKind::Point => &mut self.point,
            ShapeKind::Line => &mut self.line,
            ShapeKind::Polygon => &mut self.polygon,
            ShapeKind::Triangle => &mut self.triangle,
            ShapeKind::Rectangle => &mut self.rectangle,
            ShapeKind::Square => &mut self.square,
            ShapeKind::Circle => &mut self.circle,
            ShapeKind::Ellipse => &mut self.ellipse,
            ShapeKind::Arc => &mut self.arc,
        }
    }

    /// Managers in render and serialization order.
    pub fn managers(&self) -> impl Iterator<Item = &dyn ShapeManager> {
        ShapeKind::ALL.into_iter().map(move |kind| self.manager(kind))
    }

    pub fn current(&self) -> &dyn ShapeManager {
        self.manager(self.current.kind)
    }

    fn current_mut(&mut self) -> &mut dyn ShapeManager {
        self.manager_mut(self.current.kind)
    }

    /// Toolbar action: make `kind` current in `mode`.
    ///
    /// The outgoing manager always loses its pending construction, and loses
    /// its selection too when the kind actually changes.
    pub fn activate(&mut self, kind: ShapeKind, mode: InteractionMode) {
        let previous = self.current.kind;
        self.current_mut().reset_drawing();
        if previous != kind {
            self.current_mut().reset_selection();
        }
        self.current = Current { kind, mode };
        self.current_mut().set_mode(mode);
        log::debug!("Activated {} in {} mode", kind, mode);
    }

    /// Route one pointer event to the current manager.
    pub fn handle(&mut self, event: PointerEvent) {
        let mode = self.current.mode;
        let tolerance = self.settings.hit;
        let manager = self.current_mut();
        manager.set_mode(mode);
        match event {
            PointerEvent::Hover { position } => manager.set_mouse_position(position),
            PointerEvent::Press { position, .. } => manager.on_press(position),
            PointerEvent::Drag { position } => manager.on_drag(position),
            PointerEvent::Release { .. } => manager.on_release(),
            PointerEvent::Click { position, button } => {
                manager.on_click(position, button, &tolerance)
            }
        }
    }

    /// Reset every manager to its initial state.
    pub fn new_frame(&mut self) {
        for kind in ShapeKind::ALL {
            self.manager_mut(kind).new_frame();
        }
        self.current.mode = InteractionMode::Create;
        log::debug!("Started a new frame");
    }

    /// Commit a parsed shape into the manager of its kind.
    pub fn add_shape(&mut self, shape: Shape) -> Result<ShapeId, ShapeError> {
        self.manager_mut(shape.kind()).insert(shape)
    }

    pub fn add_from_coordinates(
        &mut self,
        kind: ShapeKind,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<usize, CoordinateError> {
        self.manager_mut(kind).add_from_coordinates(xs, ys)
    }

    /// Draw every manager in model space.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let palette = self.settings.palette();
        for manager in self.managers() {
            manager.render(surface, &palette);
        }
    }

    /// Canonical lines of every committed shape, grouped by kind.
    pub fn to_serialized_lines(&self) -> String {
        self.managers()
            .map(|manager| manager.to_serialized_lines())
            .collect()
    }

    /// Import canonical lines. Blank lines are skipped; malformed lines are
    /// reported and do not stop the rest of the batch.
    pub fn import_lines(&mut self, text: &str) -> ImportReport {
        let mut report = ImportReport::default();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(line) {
                Ok(shape) => {
                    // Decoded shapes already satisfy their kind's constraints.
                    self.manager_mut(shape.kind()).store_mut().push(shape);
                    report.imported += 1;
                }
                Err(error) => {
                    log::warn!("Skipping line {}: {}", index + 1, error);
                    report.warnings.push(LineWarning {
                        line_number: index + 1,
                        text: line.to_string(),
                        error,
                    });
                }
            }
        }
        log::debug!(
            "Imported {} shape(s), {} warning(s)",
            report.imported,
            report.warnings.len()
        );
        report
    }

    /// Export geometries of every committed shape, sorted into layers.
    pub fn geometries(&self) -> GeometryLayers {
        let resolution = self.settings.export;
        let mut layers = GeometryLayers::default();
        for manager in self.managers() {
            layers.extend(manager.geometries(&resolution));
        }
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IntPoint;

    #[test]
    fn test_initial_state() {
        let registry = ShapeRegistry::new();
        assert_eq!(registry.current_kind(), ShapeKind::Point);
        assert_eq!(registry.mode(), InteractionMode::Create);
        assert_eq!(registry.to_serialized_lines(), "");
    }

    #[test]
    fn test_activate_resets_previous_selection_on_kind_change() {
        let mut registry = ShapeRegistry::new();
        registry.add_shape(Shape::Point(IntPoint::new(0, 0))).unwrap();
        registry.activate(ShapeKind::Point, InteractionMode::Select);
        registry.handle(PointerEvent::click(0.0, 0.0));
        assert_eq!(registry.current().selected_shapes().len(), 1);

        // Same kind keeps the selection.
        registry.activate(ShapeKind::Point, InteractionMode::Move);
        assert_eq!(registry.manager(ShapeKind::Point).selected_shapes().len(), 1);

        registry.activate(ShapeKind::Line, InteractionMode::Create);
        assert!(registry.manager(ShapeKind::Point).selected_shapes().is_empty());
    }

    #[test]
    fn test_activate_resets_pending_drawing() {
        let mut registry = ShapeRegistry::new();
        registry.activate(ShapeKind::Rectangle, InteractionMode::Create);
        registry.handle(PointerEvent::click(1.0, 1.0));
        assert!(registry.current().has_pending());
        registry.activate(ShapeKind::Rectangle, InteractionMode::Create);
        assert!(!registry.current().has_pending());
    }

    #[test]
    fn test_add_shape_routes_by_kind() {
        let mut registry = ShapeRegistry::new();
        registry
            .add_shape(Shape::Line(crate::geometry::Segment::new(
                IntPoint::new(0, 0),
                IntPoint::new(1, 1),
            )))
            .unwrap();
        assert_eq!(registry.manager(ShapeKind::Line).shapes().len(), 1);
        assert!(registry.manager(ShapeKind::Point).shapes().is_empty());
    }

    #[test]
    fn test_serialized_lines_follow_kind_order() {
        let mut registry = ShapeRegistry::new();
        registry
            .add_from_coordinates(ShapeKind::Rectangle, &[0.0, 2.0], &[0.0, 2.0])
            .unwrap();
        registry
            .add_from_coordinates(ShapeKind::Point, &[7.0], &[8.0])
            .unwrap();
        assert_eq!(
            registry.to_serialized_lines(),
            "Point,(7 8)\nRectangle,0 0 2 2 \n"
        );
    }

    #[test]
    fn test_imported_wide_polygon_can_be_selected() {
        let mut registry = ShapeRegistry::new();
        let report = registry.import_lines("Polygon,(-3000000000 0) (3000000000 0) (0 5) \n");
        assert_eq!(report.imported, 1);
        assert!(report.is_clean());

        registry.activate(ShapeKind::Polygon, InteractionMode::Select);
        registry.handle(PointerEvent::click(0.0, 1.0));
        assert_eq!(registry.current().selected_shapes().len(), 1);

        registry.activate(ShapeKind::Polygon, InteractionMode::Delete);
        registry.handle(PointerEvent::click(0.0, 1.0));
        assert!(registry.current().shapes().is_empty());
    }

    #[test]
    fn test_deserialized_polygon_needs_three_vertices() {
        let empty = serde_json::from_str::<Shape>(r#"{"Polygon":[]}"#);
        assert!(empty.is_err());
        let two = serde_json::from_str::<Shape>(r#"{"Polygon":[{"x":0,"y":0},{"x":1,"y":1}]}"#);
        assert!(two.is_err());

        let shape: Shape = serde_json::from_str(
            r#"{"Triangle":[{"x":0,"y":0},{"x":10,"y":0},{"x":0,"y":10}]}"#,
        )
        .unwrap();
        let mut registry = ShapeRegistry::new();
        registry.add_shape(shape).unwrap();
        registry.activate(ShapeKind::Triangle, InteractionMode::Select);
        registry.handle(PointerEvent::click(2.0, 2.0));
        assert_eq!(registry.current().selected_shapes().len(), 1);
    }
}
