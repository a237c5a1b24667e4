mod fit;
mod rasterizer;

pub use rasterizer::{Rasterizer, ResvgRasterizer};
