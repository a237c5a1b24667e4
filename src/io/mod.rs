mod batch;
mod ops;

pub use batch::run;
pub use ops::ensure_dirs;
