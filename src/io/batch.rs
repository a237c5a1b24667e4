use crate::error::BakeResult;
use crate::model::{ConversionJob, OutputSpec, RunSummary};
use crate::render::Rasterizer;
use std::path::Path;

use super::ops::{read_source, write_output};

/// Convert every job in order and tally the outcome of each output
///
/// An unreadable source fails all of its outputs without touching the
/// filesystem. A failed output never stops the remaining ones.
pub fn run<R: Rasterizer + ?Sized>(jobs: &[ConversionJob], rasterizer: &R) -> RunSummary {
    let mut summary = RunSummary::default();

    for job in jobs {
        tracing::info!("converting {}", job.source.display());

        let source = match read_source(&job.source) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(outputs = job.outputs.len(), "{}", e);
                summary.record_skipped(job.outputs.len());
                continue;
            }
        };

        for output in &job.outputs {
            match convert_one(rasterizer, &source, &job.source, output) {
                Ok(()) => {
                    tracing::info!("  {} -> {}", job.source.display(), output.path.display());
                    summary.record_success();
                }
                Err(e) => {
                    tracing::error!(
                        "  failed {} -> {}: {}",
                        job.source.display(),
                        output.path.display(),
                        e
                    );
                    summary.record_failure();
                }
            }
        }
    }

    tracing::info!(
        total = summary.total(),
        succeeded = summary.succeeded,
        failed = summary.failed,
        "conversion complete"
    );
    summary
}

fn convert_one<R: Rasterizer + ?Sized>(
    rasterizer: &R,
    source: &[u8],
    origin: &Path,
    output: &OutputSpec,
) -> BakeResult<()> {
    let raster = rasterizer.render(source, origin, output.size(), output.fit)?;
    let bytes = rasterizer.encode(&raster)?;
    write_output(&output.path, &bytes)
}
