//! ShapePad Render Library
//!
//! Drawing surfaces for the ShapePad editor and the frame pass that applies
//! the camera transform around every manager. The Vello surface is behind the
//! `vello-renderer` feature.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{render_frame, DisplayList, FrameSurface, RecordedOp};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
