use crate::app::cli::Cli;
use crate::app::models::{OutputMode, RuntimeConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Extensions skipped when neither a preset nor the CLI supplies any.
pub const DEFAULT_IGNORE_EXTENSIONS: &[&str] = &[".meta", ".txt", ".DS_Store", ".rs"];

const DEFAULT_FILE_NAME: &str = "file_name_list";
const DEFAULT_NAMESPACE: &str = "file_name_list";
const DEFAULT_CLASS_NAME: &str = "FileNames";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PresetConfig {
    file_name: Option<String>,
    namespace: Option<String>,
    class_name: Option<String>,
    mode: Option<OutputMode>,
    ignore_extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("file_name_list")
        .join("presets.toml");

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli, project_name: Option<&str>) -> Result<RuntimeConfig> {
    let presets = load_presets_file()?;

    // Determine preset to use: CLI flag > Auto-detect > None
    let preset_key = cli.preset.as_deref().or(project_name);
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    let mut ignore_extensions = merge_vecs(preset.ignore_extensions, cli.ignore_ext);
    if ignore_extensions.is_empty() {
        ignore_extensions = DEFAULT_IGNORE_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let config = RuntimeConfig {
        search_folder: cli.search_folder,
        out_dir: cli.out_dir,
        output_file_name: cli
            .file_name
            .or(preset.file_name)
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        namespace: cli
            .namespace
            .or(preset.namespace)
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        class_name: cli
            .class_name
            .or(preset.class_name)
            .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string()),
        mode: cli.mode.or(preset.mode).unwrap_or(OutputMode::Fields),
        recursive: !cli.no_recurse,
        ignore_extensions,
        exclude: merge_vecs(preset.exclude, cli.exclude),
        templates_dir: cli.templates_dir,
    };

    Ok(config)
}
