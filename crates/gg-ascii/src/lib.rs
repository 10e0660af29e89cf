/// ASCII conversion engine for glyphgrid.
///
/// Converts pixel frames to luminance grids, then to character grids.
pub mod luminance;
