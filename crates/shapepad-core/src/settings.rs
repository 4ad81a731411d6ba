//! Editor settings: colors, marker sizes, hit tolerances and export resolution.
//!
//! Settings are plain serde data. Every field has a default so a partial JSON
//! document only overrides what it names.

use crate::render::Palette;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid settings: {0}")]
    Parse(String),
}

/// RGBA8 color that round-trips through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke colors for the three render states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub committed: SerializableColor,
    pub selected: SerializableColor,
    pub preview: SerializableColor,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            committed: SerializableColor::black(),
            selected: SerializableColor::blue(),
            preview: SerializableColor::red(),
        }
    }
}

/// Proximity thresholds for the distance-based hit-tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerance {
    /// A click hits a point when strictly closer than this.
    pub point_radius: f64,
    /// A click hits a line when strictly closer than this to its infinite line.
    pub line_distance: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            line_distance: 4.0,
        }
    }
}

/// Sample counts used when curves are exported as polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportResolution {
    /// Samples around an ellipse before the closing vertex.
    pub ellipse_segments: usize,
    /// Segments along an arc; the polyline has one more vertex than this.
    pub arc_segments: usize,
}

impl Default for ExportResolution {
    fn default() -> Self {
        Self {
            ellipse_segments: 100,
            arc_segments: 50,
        }
    }
}

/// All tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub colors: ColorSettings,
    pub stroke_width: f64,
    /// Radius of the filled disc drawn for each point.
    pub point_marker_radius: f64,
    /// Radius of the ring drawn around selected points.
    pub selection_ring_radius: f64,
    pub hit: HitTolerance,
    pub export: ExportResolution,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            colors: ColorSettings::default(),
            stroke_width: 1.0,
            point_marker_radius: 3.0,
            selection_ring_radius: 5.0,
            hit: HitTolerance::default(),
            export: ExportResolution::default(),
        }
    }
}

impl EditorSettings {
    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let settings = Self::from_json(&text)?;
        log::debug!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Resolved drawing palette.
    pub fn palette(&self) -> Palette {
        Palette {
            committed: self.colors.committed.into(),
            selected: self.colors.selected.into(),
            preview: self.colors.preview.into(),
            stroke_width: self.stroke_width,
            point_marker_radius: self.point_marker_radius,
            selection_ring_radius: self.selection_ring_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!(settings.colors.committed, SerializableColor::black());
        assert_eq!(settings.colors.selected, SerializableColor::blue());
        assert_eq!(settings.colors.preview, SerializableColor::red());
        assert!((settings.hit.point_radius - 5.0).abs() < f64::EPSILON);
        assert!((settings.hit.line_distance - 4.0).abs() < f64::EPSILON);
        assert_eq!(settings.export.ellipse_segments, 100);
        assert_eq!(settings.export.arc_segments, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            EditorSettings::from_json(r#"{ "stroke_width": 2.5, "hit": { "line_distance": 6 } }"#)
                .unwrap();
        assert!((settings.stroke_width - 2.5).abs() < f64::EPSILON);
        assert!((settings.hit.line_distance - 6.0).abs() < f64::EPSILON);
        assert!((settings.hit.point_radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(settings.colors, ColorSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = EditorSettings::default();
        settings.colors.preview = SerializableColor::new(10, 20, 30, 40);
        settings.export.arc_segments = 8;
        let json = settings.to_json().unwrap();
        assert_eq!(EditorSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json() {
        let result = EditorSettings::from_json("{ not json");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "point_marker_radius": 4 }}"#).unwrap();
        let settings = EditorSettings::load(file.path()).unwrap();
        assert!((settings.point_marker_radius - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EditorSettings::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_color_conversion() {
        let color: Color = SerializableColor::new(1, 2, 3, 4).into();
        assert_eq!(SerializableColor::from(color), SerializableColor::new(1, 2, 3, 4));
    }
}
