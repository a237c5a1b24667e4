mod config;
mod error;
mod io;
mod model;
mod render;

use anyhow::Context;
use clap::Parser;
use config::{JobConfig, DEFAULT_CONFIG_FILE};
use render::ResvgRasterizer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Rasterize SVG files into PNG renditions at the sizes listed in a job file
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// TOML job file (default: svgbake.toml in the working directory, if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Write the built-in job table to the config path and exit
    #[arg(long)]
    init: bool,

    /// More output (-v debug, -vv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report warnings and failures
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()),
        )
        .with_target(false)
        .without_time()
        .init();

    match try_main(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<u8> {
    if cli.init {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if JobConfig::write_default(&path)? {
            tracing::info!("wrote default job table to {}", path.display());
        } else {
            tracing::warn!("{} already exists, leaving it untouched", path.display());
        }
        return Ok(0);
    }

    let (config, base) = load_config(cli.config.as_deref())?;
    let config = config.resolved(&base);
    tracing::debug!(
        jobs = config.jobs.len(),
        outputs = config.output_count(),
        "job table loaded"
    );

    io::ensure_dirs(&config.ensure_dirs);

    let mut rasterizer = ResvgRasterizer::new(config.system_fonts);
    if let Some(dir) = &config.resources_dir {
        rasterizer = rasterizer.with_resources_dir(dir);
    }

    let summary = io::run(&config.jobs, &rasterizer);
    tracing::info!("  successful: {}", summary.succeeded);
    tracing::info!("  failed: {}", summary.failed);
    if summary.succeeded > 0 {
        if let Some(root) = &config.root {
            tracing::info!("PNG files generated under {}", root.display());
        }
    }

    Ok(summary.exit_code())
}

/// Load the job file and the directory its relative paths start from
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(JobConfig, PathBuf)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                tracing::info!("no {} found, using built-in job table", DEFAULT_CONFIG_FILE);
                return Ok((JobConfig::default(), PathBuf::from(".")));
            }
            fallback
        }
    };

    let config = JobConfig::load(&path)
        .with_context(|| format!("loading job file {}", path.display()))?;
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((config, base))
}
