/// Output sinks for glyphgrid: console, text file, and PNG render.

pub mod font;
pub mod rasterizer;
pub mod sink;
