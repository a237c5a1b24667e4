use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// How a source is placed into an output box when both width and height are given
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    /// Keep aspect ratio, fit inside the box, pad with transparency
    #[default]
    Contain,
    /// Keep aspect ratio, fill the box, crop the overflow
    Cover,
    /// Stretch to the box
    Fill,
}

/// Requested pixel size of one rendition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestedSize {
    pub width: Option<NonZeroU32>,
    pub height: Option<NonZeroU32>,
}

/// One raster rendition of a source image
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputSpec {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "is_default_fit")]
    pub fit: Fit,
}

fn is_default_fit(fit: &Fit) -> bool {
    *fit == Fit::default()
}

impl OutputSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: None,
            height: None,
            fit: Fit::default(),
        }
    }

    /// Square or rectangular box; zero dimensions are treated as absent
    pub fn sized(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            width: NonZeroU32::new(width),
            height: NonZeroU32::new(height),
            ..Self::new(path)
        }
    }

    pub fn size(&self) -> RequestedSize {
        RequestedSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// A source SVG and every rendition requested from it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConversionJob {
    pub source: PathBuf,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}

impl ConversionJob {
    pub fn new(source: impl Into<PathBuf>, outputs: Vec<OutputSpec>) -> Self {
        Self {
            source: source.into(),
            outputs,
        }
    }

    /// Join relative source and destination paths onto `root`
    pub fn rooted(&self, root: &Path) -> Self {
        Self {
            source: root.join(&self.source),
            outputs: self
                .outputs
                .iter()
                .map(|output| OutputSpec {
                    path: root.join(&output.path),
                    ..output.clone()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_drops_zero_dimensions() {
        let spec = OutputSpec::sized("a.png", 0, 32);
        assert_eq!(spec.width, None);
        assert_eq!(spec.height, NonZeroU32::new(32));
        assert_eq!(spec.fit, Fit::Contain);
    }

    #[test]
    fn test_rooted_keeps_absolute_paths() {
        let job = ConversionJob::new(
            "logo.svg",
            vec![
                OutputSpec::sized("out/logo.png", 400, 100),
                OutputSpec::new("/abs/logo.png"),
            ],
        );
        let rooted = job.rooted(Path::new("/site"));
        assert_eq!(rooted.source, PathBuf::from("/site/logo.svg"));
        assert_eq!(rooted.outputs[0].path, PathBuf::from("/site/out/logo.png"));
        assert_eq!(rooted.outputs[0].width, NonZeroU32::new(400));
        assert_eq!(rooted.outputs[1].path, PathBuf::from("/abs/logo.png"));
    }
}
