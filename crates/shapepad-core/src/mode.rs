//! Interaction modes shared by every shape manager.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How pointer events are interpreted by the active manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Clicks build new shapes.
    #[default]
    Create,
    /// Clicks toggle shapes in and out of the selection.
    Select,
    /// Clicks remove the shape under the pointer.
    Delete,
    /// Drags translate the selected shapes.
    Move,
}

impl InteractionMode {
    /// All modes in toolbar order.
    pub const ALL: [InteractionMode; 4] = [
        InteractionMode::Create,
        InteractionMode::Select,
        InteractionMode::Delete,
        InteractionMode::Move,
    ];

    /// Display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            InteractionMode::Create => "Create",
            InteractionMode::Select => "Select",
            InteractionMode::Delete => "Delete",
            InteractionMode::Move => "Move",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_create() {
        assert_eq!(InteractionMode::default(), InteractionMode::Create);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = InteractionMode::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Create", "Select", "Delete", "Move"]);
    }
}
