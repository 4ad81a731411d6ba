use super::{AnchoredManager, AnchoredShape, CoordinateError};
use crate::geometry::{IntPoint, Segment};
use crate::shapes::{Shape, ShapeKind};

/// Straight segment between the two clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineShape;

impl AnchoredShape for LineShape {
    const KIND: ShapeKind = ShapeKind::Line;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Line(Segment::new(anchor, end))
    }

    /// A polyline: `n` points give `n - 1` chained segments.
    fn from_points(points: &[IntPoint]) -> Result<Vec<Shape>, CoordinateError> {
        if points.len() < 2 {
            return Err(CoordinateError::TooFewPoints {
                kind: Self::KIND,
                minimum: 2,
                found: points.len(),
            });
        }
        Ok(points
            .windows(2)
            .map(|w| Self::build(w[0], w[1]))
            .collect())
    }
}

pub type LineManager = AnchoredManager<LineShape>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::managers::ShapeManager;
    use crate::mode::InteractionMode;
    use crate::settings::HitTolerance;
    use kurbo::Point;

    fn click(manager: &mut LineManager, x: f64, y: f64) {
        manager.on_click(Point::new(x, y), MouseButton::Primary, &HitTolerance::default());
    }

    #[test]
    fn test_two_clicks_commit_segment() {
        let mut manager = LineManager::new();
        click(&mut manager, 0.0, 0.0);
        assert!(manager.has_pending());
        assert!(manager.shapes().is_empty());
        click(&mut manager, 100.0, 0.0);
        assert!(!manager.has_pending());
        assert_eq!(manager.to_serialized_lines(), "Line,(0 0) (100 0)\n");
    }

    #[test]
    fn test_delete_beyond_segment_span() {
        let mut manager = LineManager::new();
        click(&mut manager, 0.0, 0.0);
        click(&mut manager, 100.0, 0.0);
        manager.set_mode(InteractionMode::Delete);
        click(&mut manager, 200.0, 3.0);
        assert!(manager.shapes().is_empty());
    }

    #[test]
    fn test_polyline_ingestion() {
        let mut manager = LineManager::new();
        let added = manager
            .add_from_coordinates(&[0.0, 10.0, 20.0], &[0.0, 0.0, 10.0])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(
            manager.to_serialized_lines(),
            "Line,(0 0) (10 0)\nLine,(10 0) (20 10)\n"
        );
        assert!(manager.add_from_coordinates(&[1.0], &[1.0]).is_err());
        assert_eq!(manager.shapes().len(), 2);
    }

    #[test]
    fn test_leaving_create_discards_anchor() {
        let mut manager = LineManager::new();
        click(&mut manager, 5.0, 5.0);
        manager.set_mode(InteractionMode::Select);
        assert!(!manager.has_pending());
        manager.set_mode(InteractionMode::Create);
        click(&mut manager, 6.0, 6.0);
        assert!(manager.has_pending());
        assert!(manager.shapes().is_empty());
    }

    #[test]
    fn test_preview_follows_cursor() {
        let mut manager = LineManager::new();
        manager.set_mouse_position(Point::new(3.0, 3.0));
        assert!(manager.preview_path(IntPoint::new(3, 3)).is_none());
        click(&mut manager, 0.0, 0.0);
        assert!(manager.preview_path(IntPoint::new(3, 3)).is_some());
    }
}
