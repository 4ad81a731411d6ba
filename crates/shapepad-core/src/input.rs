//! Pointer events in model space.
//!
//! The shell maps raw window coordinates through the view transform before
//! building these events, so every position here is already a model-space point.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button. Closes polygons in Create mode.
    Secondary,
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == MouseButton::Primary
    }

    pub fn is_secondary(self) -> bool {
        self == MouseButton::Secondary
    }
}

/// Pointer event routed to the current shape manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer moved with no button held.
    Hover { position: Point },
    /// Button went down.
    Press { position: Point, button: MouseButton },
    /// Pointer moved with a button held.
    Drag { position: Point },
    /// Button went up.
    Release { position: Point, button: MouseButton },
    /// A press and release at the same place.
    Click { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Hover { position }
            | PointerEvent::Press { position, .. }
            | PointerEvent::Drag { position }
            | PointerEvent::Release { position, .. }
            | PointerEvent::Click { position, .. } => position,
        }
    }

    /// Convenience constructor for a primary-button click.
    pub fn click(x: f64, y: f64) -> Self {
        PointerEvent::Click {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }
}
