use crate::app::models::OutputMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a source file listing the file names under a folder"
)]
pub struct Cli {
    /// Folder to scan for file names
    pub search_folder: PathBuf,

    /// Folder the generated file is written to
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,

    /// Base name of the generated file (the extension is added automatically)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Module name emitted into the generated file
    #[arg(long)]
    pub namespace: Option<String>,

    /// Struct name emitted into the generated file
    #[arg(long)]
    pub class_name: Option<String>,

    /// Shape of the generated declarations
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Only scan the top level of the search folder
    #[arg(long)]
    pub no_recurse: bool,

    /// Extensions to skip, with leading dot (e.g. '.meta')
    #[arg(long, num_args = 1..)]
    pub ignore_ext: Option<Vec<String>>,

    /// Glob patterns for files or directories to exclude
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Directory holding replacement template files
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}
