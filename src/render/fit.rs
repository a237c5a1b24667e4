// Geometry for placing an SVG of a given size into an output pixmap

use crate::error::{BakeError, BakeResult};
use crate::model::{Fit, RequestedSize};

/// Output pixel size plus the transform that maps SVG units onto it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Placement {
    pub fn transform(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.offset_x,
            self.offset_y,
        )
    }
}

/// Compute the output size and transform for a source of `svg_width` x `svg_height`
///
/// With both dimensions the fit policy decides placement. With only one, the
/// other follows the source aspect ratio. With neither, the intrinsic size is kept.
pub fn place(
    svg_width: f32,
    svg_height: f32,
    requested: RequestedSize,
    fit: Fit,
) -> BakeResult<Placement> {
    if !(svg_width.is_finite() && svg_height.is_finite() && svg_width > 0.0 && svg_height > 0.0)
    {
        return Err(BakeError::InvalidSize {
            width: svg_width,
            height: svg_height,
        });
    }

    let placement = match (requested.width, requested.height) {
        (Some(w), Some(h)) => boxed(svg_width, svg_height, w.get(), h.get(), fit),
        (Some(w), None) => {
            let scale = w.get() as f32 / svg_width;
            uniform(w.get(), scaled_side(svg_height, scale), scale)
        }
        (None, Some(h)) => {
            let scale = h.get() as f32 / svg_height;
            uniform(scaled_side(svg_width, scale), h.get(), scale)
        }
        (None, None) => uniform(
            svg_width.ceil() as u32,
            svg_height.ceil() as u32,
            1.0,
        ),
    };
    Ok(placement)
}

fn boxed(svg_width: f32, svg_height: f32, width: u32, height: u32, fit: Fit) -> Placement {
    let scale_x = width as f32 / svg_width;
    let scale_y = height as f32 / svg_height;

    let scale = match fit {
        Fit::Fill => {
            return Placement {
                width,
                height,
                scale_x,
                scale_y,
                offset_x: 0.0,
                offset_y: 0.0,
            }
        }
        Fit::Contain => scale_x.min(scale_y),
        Fit::Cover => scale_x.max(scale_y),
    };

    // Center; negative offsets crop evenly for cover
    Placement {
        width,
        height,
        scale_x: scale,
        scale_y: scale,
        offset_x: (width as f32 - svg_width * scale) / 2.0,
        offset_y: (height as f32 - svg_height * scale) / 2.0,
    }
}

fn uniform(width: u32, height: u32, scale: f32) -> Placement {
    Placement {
        width,
        height,
        scale_x: scale,
        scale_y: scale,
        offset_x: 0.0,
        offset_y: 0.0,
    }
}

fn scaled_side(side: f32, scale: f32) -> u32 {
    ((side * scale).round() as u32).max(1)
}
