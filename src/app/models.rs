use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub search_folder: PathBuf,
    pub out_dir: PathBuf,
    pub output_file_name: String,
    pub namespace: String,
    pub class_name: String,
    pub mode: OutputMode,
    pub recursive: bool,
    pub ignore_extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub templates_dir: Option<PathBuf>,
}

/// Shape of the generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One named string constant per file
    Fields,
    /// One key/value pair per file
    Dictionary,
}

/// A single file discovered during the scan, stored as a forward-slash path
/// relative to the search folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedName {
    pub relative_path: String,
}

impl CollectedName {
    /// File-name portion of the path without its extension. Empty for names
    /// that are nothing but a dotted suffix, such as `.DS_Store`.
    pub fn base_name(&self) -> &str {
        let name = self
            .relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path);
        match name.rfind('.') {
            Some(idx) => &name[..idx],
            None => name,
        }
    }
}

/// Extension of `name` starting at its last dot, including the dot.
pub fn dot_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}
