/// Image loading and resampling for glyphgrid.

pub mod image;
pub mod resize;
