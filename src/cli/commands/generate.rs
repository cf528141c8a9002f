//! Generate Command
//!
//! Regenerate aggregate, redirect and forward headers for one project.

use std::path::PathBuf;

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::generator::current_year;
use crate::pipeline::{self, RunSummary};
use crate::project::Project;
use crate::types::Result;

pub struct GenerateOptions {
    /// Project root; the current directory when unset
    pub project_dir: Option<PathBuf>,
    /// Config file overriding `<project>/includegen.toml`
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run(options: GenerateOptions) -> Result<RunSummary> {
    let root = resolve_project_dir(options.project_dir)?;
    let config = ConfigLoader::load(&root, options.config.as_deref())?;
    let project = Project::locate(&root, &config)?;

    tracing::info!("Updating headers in: {}", project.source_root.display());
    let summary = pipeline::run(&project, &config, current_year())?;

    if !options.quiet {
        let output = Output::new();
        output.summary(&summary);
        output.success(&format!("Updated {}", project.public_root.display()));
    }

    Ok(summary)
}

pub(crate) fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
