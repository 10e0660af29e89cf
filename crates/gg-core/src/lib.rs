/// Configuration, types, and shared structures for glyphgrid.
///
/// This crate contains the grids passed between pipeline stages, the glyph
/// ramp, the run configuration and the error type shared by the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::LuminanceLut;
pub use config::{OutputKind, RunConfig};
pub use error::CoreError;
pub use frame::{AsciiGrid, FrameBuffer, LumaGrid};
