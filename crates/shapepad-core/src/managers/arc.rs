use super::{AnchoredManager, AnchoredShape};
use crate::geometry::{ArcSpec, Frame, IntPoint};
use crate::shapes::{Shape, ShapeKind};

/// Open upper half-arc of the ellipse inscribed in the clicks' box.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcShape;

impl AnchoredShape for ArcShape {
    const KIND: ShapeKind = ShapeKind::Arc;
    const SELECTION_RESET_CLEARS_ANCHOR: bool = true;

    fn build(anchor: IntPoint, end: IntPoint) -> Shape {
        Shape::Arc(ArcSpec::upper_half(Frame::from_corners(anchor, end)))
    }
}

pub type ArcManager = AnchoredManager<ArcShape>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::managers::ShapeManager;
    use crate::mode::InteractionMode;
    use crate::settings::HitTolerance;
    use kurbo::Point;

    fn click(manager: &mut ArcManager, x: f64, y: f64) {
        manager.on_click(Point::new(x, y), MouseButton::Primary, &HitTolerance::default());
    }

    #[test]
    fn test_arc_line_format() {
        let mut manager = ArcManager::new();
        click(&mut manager, 0.0, 0.0);
        click(&mut manager, 40.0, 20.0);
        assert_eq!(manager.to_serialized_lines(), "Arc,0 0 40 20 0 180 0 \n");
    }

    #[test]
    fn test_reset_selection_drops_anchor() {
        let mut manager = ArcManager::new();
        click(&mut manager, 0.0, 0.0);
        assert!(manager.has_pending());
        manager.reset_selection();
        assert!(!manager.has_pending());
    }

    #[test]
    fn test_select_upper_half_only() {
        let mut manager = ArcManager::new();
        manager.add_from_coordinates(&[0.0, 20.0], &[0.0, 20.0]).unwrap();
        manager.set_mode(InteractionMode::Select);
        click(&mut manager, 10.0, 15.0);
        assert!(manager.selected_shapes().is_empty());
        click(&mut manager, 10.0, 5.0);
        assert_eq!(manager.selected_shapes().len(), 1);
    }
}
