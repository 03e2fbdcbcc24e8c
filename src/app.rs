// Declare modules
pub mod cli;
pub mod collector;
pub mod config;
pub mod models;
pub mod renderer;
pub mod templates;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;

use self::cli::Cli;
use self::collector::Collector;
use self::config::resolve_config;
use self::models::RuntimeConfig;
use self::renderer::Renderer;
use self::templates::TemplateSet;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify the fallback preset key
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    // Simple heuristic: name of current folder
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 3. Resolve Configuration
    let config = resolve_config(args, project_name)?;

    // 4. Generate
    let destination = generate(&config)?;
    log::info!("Generated {}", destination.display());

    Ok(())
}

/// Run one generation pass: collect names, render the document, write it out.
/// Returns the path of the written file.
pub fn generate(config: &RuntimeConfig) -> Result<PathBuf> {
    let collector = Collector::new(config)?;
    let names = collector.collect();
    if names.is_empty() {
        log::warn!(
            "No files matched under {:?}; the generated body will be empty",
            config.search_folder
        );
    }

    // Templates load before anything is written, so a missing asset aborts
    // the run without leaving a partial file behind.
    let templates = TemplateSet::load(config.mode, config.templates_dir.as_deref())?;
    let renderer = Renderer::new(config, templates);
    let document = renderer.render(&names);

    let destination = config
        .out_dir
        .join(format!("{}.rs", config.output_file_name));
    fs::write(&destination, &document).context(format!("Failed to write {:?}", destination))?;

    Ok(destination)
}
