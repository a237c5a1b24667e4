use crate::error::{BakeError, BakeResult};
use crate::model::{ConversionJob, OutputSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "svgbake.toml";

/// Job table and run options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JobConfig {
    /// Base directory for relative paths, itself relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Directory for relative `href`s inside SVGs (default: each source's own directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_dir: Option<PathBuf>,
    /// Load system fonts so `<text>` renders
    #[serde(default = "default_system_fonts")]
    pub system_fonts: bool,
    /// Directories created before converting; failures only warn
    #[serde(default)]
    pub ensure_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub jobs: Vec<ConversionJob>,
}

fn default_system_fonts() -> bool {
    true
}

impl Default for JobConfig {
    fn default() -> Self {
        let public = Path::new("public");
        JobConfig {
            root: None,
            resources_dir: None,
            system_fonts: true,
            ensure_dirs: vec![public.join("covers")],
            jobs: vec![
                ConversionJob::new(
                    public.join("favicon.svg"),
                    vec![
                        OutputSpec::sized(public.join("favicon-16x16.png"), 16, 16),
                        OutputSpec::sized(public.join("favicon-32x32.png"), 32, 32),
                        OutputSpec::sized(public.join("favicon-48x48.png"), 48, 48),
                        OutputSpec::sized(public.join("favicon-64x64.png"), 64, 64),
                        OutputSpec::sized(public.join("favicon.png"), 256, 256),
                    ],
                ),
                ConversionJob::new(
                    public.join("logo.svg"),
                    vec![
                        OutputSpec::sized(public.join("logo.png"), 400, 100),
                        OutputSpec::sized(public.join("logo-2x.png"), 800, 200),
                    ],
                ),
            ],
        }
    }
}

impl JobConfig {
    /// Parse a config from TOML text; `origin` is only used in error messages
    pub fn from_toml(contents: &str, origin: &Path) -> BakeResult<Self> {
        toml::from_str(contents).map_err(|e| BakeError::ConfigParse {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> BakeResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| BakeError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Write the built-in job table to `path` unless a file is already there
    ///
    /// Returns false when the file exists and was left alone.
    pub fn write_default(path: &Path) -> BakeResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        let write_err = |reason: String| BakeError::ConfigWrite {
            path: path.to_path_buf(),
            reason,
        };

        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let contents =
            toml::to_string_pretty(&JobConfig::default()).map_err(|e| write_err(e.to_string()))?;
        fs::write(path, contents).map_err(|e| write_err(e.to_string()))?;
        Ok(true)
    }

    /// Make every relative path absolute against `base` joined with `root`
    pub fn resolved(&self, base: &Path) -> Self {
        let root = match &self.root {
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };
        JobConfig {
            root: Some(root.clone()),
            resources_dir: self.resources_dir.as_ref().map(|dir| root.join(dir)),
            system_fonts: self.system_fonts,
            ensure_dirs: self.ensure_dirs.iter().map(|dir| root.join(dir)).collect(),
            jobs: self.jobs.iter().map(|job| job.rooted(&root)).collect(),
        }
    }

    pub fn output_count(&self) -> usize {
        self.jobs.iter().map(|job| job.outputs.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fit;
    use std::num::NonZeroU32;

    #[test]
    fn test_default_config() {
        let config = JobConfig::default();
        assert_eq!(config.jobs.len(), 2);
        assert_eq!(config.output_count(), 7);
        assert_eq!(config.jobs[0].source, Path::new("public").join("favicon.svg"));
        assert_eq!(config.jobs[1].outputs[1].width, NonZeroU32::new(800));
        assert_eq!(config.ensure_dirs, vec![Path::new("public").join("covers")]);
        assert!(config.system_fonts);
    }

    #[test]
    fn test_config_serialization() {
        let config = JobConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
        let deserialized = JobConfig::from_toml(&toml_str, Path::new("t.toml"))
            .expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_parse_job_table() {
        let config = JobConfig::from_toml(
            r#"
            root = "site"
            ensure_dirs = ["public/covers"]

            [[jobs]]
            source = "public/og-image.svg"
            outputs = [
                { path = "public/og-image.png", width = 1200, height = 630, fit = "cover" },
                { path = "public/og-native.png" },
                { path = "public/og-wide.png", width = 600 },
            ]
            "#,
            Path::new("svgbake.toml"),
        )
        .unwrap();

        assert_eq!(config.root, Some(PathBuf::from("site")));
        assert!(config.system_fonts);
        let outputs = &config.jobs[0].outputs;
        assert_eq!(outputs[0].fit, Fit::Cover);
        assert_eq!(outputs[0].height, NonZeroU32::new(630));
        assert_eq!(outputs[1].width, None);
        assert_eq!(outputs[1].fit, Fit::Contain);
        assert_eq!(outputs[2].height, None);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = JobConfig::from_toml(
            r#"
            [[jobs]]
            source = "a.svg"
            outputs = [{ path = "a.png", width = 0, height = 16 }]
            "#,
            Path::new("bad.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, BakeError::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_fit_rejected() {
        let result = JobConfig::from_toml(
            r#"
            [[jobs]]
            source = "a.svg"
            outputs = [{ path = "a.png", width = 16, height = 16, fit = "squash" }]
            "#,
            Path::new("bad.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolved_paths() {
        let config = JobConfig {
            root: Some(PathBuf::from("web")),
            resources_dir: Some(PathBuf::from("assets")),
            ..JobConfig::default()
        };
        let resolved = config.resolved(Path::new("/project"));
        assert_eq!(resolved.root, Some(PathBuf::from("/project/web")));
        assert_eq!(resolved.resources_dir, Some(PathBuf::from("/project/web/assets")));
        assert_eq!(resolved.ensure_dirs[0], PathBuf::from("/project/web/public/covers"));
        assert_eq!(
            resolved.jobs[1].outputs[0].path,
            PathBuf::from("/project/web/public/logo.png")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JobConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, BakeError::ConfigRead { .. }));
    }

    #[test]
    fn test_write_default_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf/svgbake.toml");

        assert!(JobConfig::write_default(&path).unwrap());
        assert_eq!(JobConfig::load(&path).unwrap(), JobConfig::default());

        fs::write(&path, "jobs = []").unwrap();
        assert!(!JobConfig::write_default(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "jobs = []");
    }
}
