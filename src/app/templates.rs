use crate::app::models::OutputMode;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

const FIELDS_DOCUMENT: &str = include_str!("../../templates/name_list.rs.tmpl");
const DICTIONARY_DOCUMENT: &str = include_str!("../../templates/name_dictionary.rs.tmpl");

/// Per-line templates. The root document for a mode must contain its per-line
/// template verbatim; rendering splices the generated block in its place.
pub const FIELDS_LINE: &str = r##"        pub const #FILENAME#: &str = "#filename#";"##;
pub const DICTIONARY_LINE: &str = r##"                ("#FILENAME#", "#filename#"),"##;

/// Root template document plus the per-line template for one output mode.
pub struct TemplateSet {
    pub document: String,
    pub line: &'static str,
}

impl TemplateSet {
    /// Load the templates for `mode`, reading the root document from
    /// `templates_dir` when given and falling back to the built-in assets.
    pub fn load(mode: OutputMode, templates_dir: Option<&Path>) -> Result<Self> {
        let line = match mode {
            OutputMode::Fields => FIELDS_LINE,
            OutputMode::Dictionary => DICTIONARY_LINE,
        };

        let document = match templates_dir {
            Some(dir) => {
                let path = dir.join(template_file_name(mode));
                fs::read_to_string(&path)
                    .context(format!("Failed to read template at {:?}", path))?
            }
            None => builtin_document(mode).to_string(),
        };

        if !document.contains(line) {
            bail!(
                "Template for {:?} mode does not contain the per-line placeholder {:?}",
                mode,
                line
            );
        }

        Ok(Self { document, line })
    }
}

pub fn template_file_name(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::Fields => "name_list.rs.tmpl",
        OutputMode::Dictionary => "name_dictionary.rs.tmpl",
    }
}

fn builtin_document(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::Fields => FIELDS_DOCUMENT,
        OutputMode::Dictionary => DICTIONARY_DOCUMENT,
    }
}
