pub mod job;
pub mod summary;

pub use job::{ConversionJob, Fit, OutputSpec, RequestedSize};
pub use summary::RunSummary;
