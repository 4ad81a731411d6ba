//! ShapePad Core Library
//!
//! Platform-agnostic shape management for the ShapePad editor: geometry,
//! the per-kind managers and their interaction modes, the canonical line
//! codec, and the registry that routes pointer events.

pub mod camera;
pub mod codec;
pub mod export;
pub mod geometry;
pub mod input;
pub mod managers;
pub mod mode;
pub mod registry;
pub mod render;
pub mod settings;
pub mod shapes;
pub mod store;

pub use camera::Camera;
pub use codec::CodecError;
pub use export::{Geometry, GeometryLayers};
pub use geometry::{ArcClosure, ArcSpec, Frame, IntPoint, IntRect, Ring, Segment};
pub use input::{MouseButton, PointerEvent};
pub use managers::{CoordinateError, InteractionState, ShapeError, ShapeManager};
pub use mode::InteractionMode;
pub use registry::{ImportReport, LineWarning, ShapeRegistry};
pub use render::{DrawSurface, Palette};
pub use settings::{EditorSettings, SerializableColor, SettingsError};
pub use shapes::{Shape, ShapeKind};
pub use store::{ShapeId, ShapeStore};
