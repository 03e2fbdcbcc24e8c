use crate::app::models::{CollectedName, OutputMode, RuntimeConfig};
use crate::app::templates::TemplateSet;

pub const NAMESPACE_TOKEN: &str = "#NAMESPACE#";
pub const CLASS_NAME_TOKEN: &str = "#CLASSNAME#";
pub const FILE_NAME_TOKEN: &str = "#FILENAME#";
pub const FILE_VALUE_TOKEN: &str = "#filename#";

pub struct Renderer<'a> {
    config: &'a RuntimeConfig,
    templates: TemplateSet,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RuntimeConfig, templates: TemplateSet) -> Self {
        Self { config, templates }
    }

    /// Produce the full generated document for the collected names.
    pub fn render(&self, names: &[CollectedName]) -> String {
        let document = self
            .templates
            .document
            .replace(NAMESPACE_TOKEN, &self.config.namespace)
            .replace(CLASS_NAME_TOKEN, &self.config.class_name);

        let block = self.render_lines(names);
        document.replacen(self.templates.line, &block, 1)
    }

    fn render_lines(&self, names: &[CollectedName]) -> String {
        let mut lines = Vec::new();
        for name in names {
            let base = name.base_name();
            if base.trim().is_empty() {
                continue;
            }

            // Constant names cannot carry spaces; dictionary keys keep them.
            let token = match self.config.mode {
                OutputMode::Fields => base.replace(' ', ""),
                OutputMode::Dictionary => base.to_string(),
            };

            lines.push(
                self.templates
                    .line
                    .replace(FILE_NAME_TOKEN, &token)
                    .replace(FILE_VALUE_TOKEN, &name.relative_path),
            );
        }
        lines.join("\n")
    }
}
