// Rasterizer trait and the resvg-backed implementation

use super::fit::place;
use crate::error::{BakeError, BakeResult};
use crate::model::{Fit, RequestedSize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Vector-to-raster capability used by the batch loop
///
/// Implementations turn SVG bytes into a pixmap and a pixmap into file bytes.
/// The batch loop only cares whether each step succeeded.
pub trait Rasterizer {
    /// Render `source` (read from `origin`) at the requested size
    fn render(
        &self,
        source: &[u8],
        origin: &Path,
        size: RequestedSize,
        fit: Fit,
    ) -> BakeResult<Pixmap>;

    /// Encode a rendered pixmap as PNG bytes
    fn encode(&self, raster: &Pixmap) -> BakeResult<Vec<u8>> {
        raster
            .encode_png()
            .map_err(|e| BakeError::Encode(e.to_string()))
    }
}

/// Renders with resvg onto a transparent tiny-skia pixmap
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    resources_dir: Option<PathBuf>,
}

impl ResvgRasterizer {
    /// Create a rasterizer, optionally loading system fonts for `<text>` elements
    pub fn new(system_fonts: bool) -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        if system_fonts {
            fontdb.load_system_fonts();
            tracing::debug!(faces = fontdb.len(), "loaded system fonts");
        }
        Self {
            fontdb: Arc::new(fontdb),
            resources_dir: None,
        }
    }

    /// Resolve relative `href`s against a fixed directory instead of each source's own
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = Some(dir.into());
        self
    }

    fn options(&self, origin: &Path) -> usvg::Options<'static> {
        let resources_dir = self
            .resources_dir
            .clone()
            .or_else(|| origin.parent().map(Path::to_path_buf));
        usvg::Options {
            resources_dir,
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn render(
        &self,
        source: &[u8],
        origin: &Path,
        size: RequestedSize,
        fit: Fit,
    ) -> BakeResult<Pixmap> {
        let opt = self.options(origin);
        let tree = usvg::Tree::from_data(source, &opt).map_err(|e| BakeError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })?;

        let svg_size = tree.size();
        let placement = place(svg_size.width(), svg_size.height(), size, fit)?;
        tracing::debug!(
            ?placement,
            svg_width = svg_size.width(),
            svg_height = svg_size.height(),
            "placing svg"
        );

        let mut pixmap =
            Pixmap::new(placement.width, placement.height).ok_or(BakeError::Allocate {
                width: placement.width,
                height: placement.height,
            })?;
        resvg::render(&tree, placement.transform(), &mut pixmap.as_mut());
        Ok(pixmap)
    }
}
