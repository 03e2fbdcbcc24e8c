use crate::app::models::{dot_extension, CollectedName, RuntimeConfig};
use anyhow::{ensure, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct Collector {
    root: PathBuf,
    recursive: bool,
    ignore_extensions: Vec<String>,
    exclude_set: GlobSet,
}

impl Collector {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        ensure!(
            config.search_folder.is_dir(),
            "Search folder {:?} is not a directory",
            config.search_folder
        );
        Ok(Self {
            root: config.search_folder.clone(),
            recursive: config.recursive,
            ignore_extensions: config.ignore_extensions.clone(),
            exclude_set: build_globset(&config.exclude)?,
        })
    }

    /// Walk the search folder and return every file that passes the filters,
    /// as unique relative paths sorted for stable output.
    pub fn collect(&self) -> Vec<CollectedName> {
        let mut names = Vec::new();
        let mut seen = HashSet::new();

        // Standard filters off: no gitignore semantics here, hidden files are
        // legitimate candidates until the extension filter says otherwise.
        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false);
        if !self.recursive {
            builder.max_depth(Some(1));
        }

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if let Some(name) = self.process_entry(entry.path()) {
                        if seen.insert(name.relative_path.clone()) {
                            names.push(name);
                        }
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        names.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        names
    }

    fn process_entry(&self, path: &Path) -> Option<CollectedName> {
        if path == self.root || path.is_dir() {
            return None;
        }

        let file_name = path.file_name()?.to_str()?;
        if let Some(extension) = dot_extension(file_name) {
            if self.ignore_extensions.iter().any(|i| i == extension) {
                return None;
            }
        }

        let relative = diff_paths(path, &self.root)?;
        if self.exclude_set.is_match(&relative) {
            return None;
        }

        let relative_path = relative.to_string_lossy().replace('\\', "/");
        if relative_path.is_empty() {
            return None;
        }

        Some(CollectedName { relative_path })
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::DEFAULT_IGNORE_EXTENSIONS;
    use crate::app::models::OutputMode;
    use std::fs;

    fn config_for(root: &Path) -> RuntimeConfig {
        RuntimeConfig {
            search_folder: root.to_path_buf(),
            out_dir: root.to_path_buf(),
            output_file_name: "file_name_list".to_string(),
            namespace: "file_name_list".to_string(),
            class_name: "FileNames".to_string(),
            mode: OutputMode::Fields,
            recursive: true,
            ignore_extensions: DEFAULT_IGNORE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude: Vec::new(),
            templates_dir: None,
        }
    }

    fn touch(root: &Path, name: &str) {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    fn collect_with(config: &RuntimeConfig) -> Vec<String> {
        let collector = Collector::new(config).unwrap();
        collector
            .collect()
            .into_iter()
            .map(|n| n.relative_path)
            .collect()
    }

    #[test]
    fn skips_ignored_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "foo.png");
        touch(dir.path(), "bar.meta");
        touch(dir.path(), "note.txt");
        touch(dir.path(), ".DS_Store");
        touch(dir.path(), "generated.rs");

        assert_eq!(collect_with(&config_for(dir.path())), vec!["foo.png"]);
    }

    #[test]
    fn extension_match_is_exact_and_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "upper.TXT");
        touch(dir.path(), "archive.tar.gz");

        assert_eq!(
            collect_with(&config_for(dir.path())),
            vec!["archive.tar.gz", "upper.TXT"]
        );
    }

    #[test]
    fn recurses_into_subfolders_by_default() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "foo.png");
        touch(dir.path(), "sub/nested.png");

        assert_eq!(
            collect_with(&config_for(dir.path())),
            vec!["foo.png", "sub/nested.png"]
        );
    }

    #[test]
    fn scans_top_level_only_when_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "foo.png");
        touch(dir.path(), "sub/nested.png");

        let mut config = config_for(dir.path());
        config.recursive = false;
        assert_eq!(collect_with(&config), vec!["foo.png"]);
    }

    #[test]
    fn exclude_globs_drop_matching_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "foo.png");
        touch(dir.path(), "sub/nested.png");

        let mut config = config_for(dir.path());
        config.exclude = vec!["sub/**".to_string()];
        assert_eq!(collect_with(&config), vec!["foo.png"]);
    }

    #[test]
    fn collected_paths_are_unique_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.png");
        touch(dir.path(), "sub/a.png");

        let names = collect_with(&config_for(dir.path()));
        assert_eq!(names, vec!["a.png", "b.png", "sub/a.png"]);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn missing_search_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.search_folder = dir.path().join("absent");
        assert!(Collector::new(&config).is_err());
    }

    #[test]
    fn invalid_exclude_glob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.exclude = vec!["[".to_string()];
        assert!(Collector::new(&config).is_err());
    }
}
