//! Configuration handling for litdoc.
//! Loads the optional project configuration file and defines the options
//! accepted by each processing operation.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::parameters::ParameterSet;
use crate::provider::ProviderSettings;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project-wide defaults read from `litdoc.json`, `litdoc.yml` or `litdoc.yaml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub template: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub layout_roots: Vec<PathBuf>,
    pub replacements: IndexMap<String, String>,
    pub include_source: bool,
    pub script_extensions: Vec<String>,
}

/// Options for rendering a single markdown or script document.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Template reference. `None` writes the content followed by tooltips.
    pub template: Option<PathBuf>,
    /// Output file. Defaults to the input path with the format's extension.
    pub output: Option<PathBuf>,
    /// Output format. Defaults to HTML.
    pub format: Option<OutputFormat>,
    /// Extra parameters, overriding generated ones with the same name.
    pub replacements: ParameterSet,
    /// Engine search directories after the template's own directory.
    pub layout_roots: Vec<PathBuf>,
    /// Expose the raw source as the `source` parameter. `None` leaves the
    /// choice to the project configuration, off by default.
    pub include_source: Option<bool>,
}

/// Options for rendering every document found under a directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryOptions {
    pub template: Option<PathBuf>,
    /// Root of the generated tree; mirrors the input directory layout.
    pub output_dir: PathBuf,
    pub format: Option<OutputFormat>,
    pub replacements: ParameterSet,
    pub layout_roots: Vec<PathBuf>,
    pub include_source: Option<bool>,
    /// Extensions rendered as scripts. Empty means `["rs"]`.
    pub script_extensions: Vec<String>,
}

impl DocumentOptions {
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            format: self.format.unwrap_or_default(),
            include_source: self.include_source.unwrap_or(false),
            replacements: self.replacements.clone(),
        }
    }
}

impl DirectoryOptions {
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            format: self.format.unwrap_or_default(),
            include_source: self.include_source.unwrap_or(false),
            replacements: self.replacements.clone(),
        }
    }
}

impl ProjectConfig {
    /// Fills the options left unset with the project defaults.
    ///
    /// Explicit options win. Replacements are merged with explicit values
    /// taking precedence, layout roots are concatenated.
    pub fn apply_to_document(&self, options: DocumentOptions) -> DocumentOptions {
        DocumentOptions {
            template: options.template.or_else(|| self.template.clone()),
            output: options.output,
            format: options.format.or(self.format),
            replacements: self.merge_replacements(&options.replacements),
            layout_roots: self.merge_layout_roots(&options.layout_roots),
            include_source: Some(options.include_source.unwrap_or(self.include_source)),
        }
    }

    /// Directory counterpart of [`ProjectConfig::apply_to_document`].
    pub fn apply_to_directory(&self, options: DirectoryOptions) -> DirectoryOptions {
        let script_extensions = if options.script_extensions.is_empty() {
            self.script_extensions.clone()
        } else {
            options.script_extensions
        };
        DirectoryOptions {
            template: options.template.or_else(|| self.template.clone()),
            output_dir: options.output_dir,
            format: options.format.or(self.format),
            replacements: self.merge_replacements(&options.replacements),
            layout_roots: self.merge_layout_roots(&options.layout_roots),
            include_source: Some(options.include_source.unwrap_or(self.include_source)),
            script_extensions,
        }
    }

    fn merge_replacements(&self, explicit: &ParameterSet) -> ParameterSet {
        let mut merged = ParameterSet::new();
        merged.insert_all(&self.replacements);
        for (name, value) in explicit.iter() {
            merged.insert(name, value);
        }
        merged
    }

    fn merge_layout_roots(&self, explicit: &[PathBuf]) -> Vec<PathBuf> {
        explicit.iter().chain(self.layout_roots.iter()).cloned().collect()
    }

    /// Resolves relative paths against the directory holding the configuration.
    fn resolve_paths(mut self, base: &Path) -> Self {
        self.template = self.template.map(|template| base.join(template));
        self.layout_roots = self.layout_roots.into_iter().map(|root| base.join(root)).collect();
        self
    }
}

/// Reads the first configuration file found in `project_dir`.
///
/// # Arguments
/// * `project_dir` - Directory searched for configuration files
/// * `config_files` - Candidate file names, in lookup order
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first file found, if any
pub fn load_config<P: AsRef<Path>>(
    project_dir: P,
    config_files: &[&str],
) -> Result<Option<String>> {
    for file in config_files {
        let config_path = project_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return std::fs::read_to_string(&config_path).map(Some).map_err(Error::IoError);
        }
    }
    debug!("No configuration file found in {}", project_dir.as_ref().display());
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
///   or does not match the expected fields
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the project configuration from `project_dir`, or the defaults
/// when there is no configuration file.
pub fn get_config<P: AsRef<Path>>(project_dir: P) -> Result<ProjectConfig> {
    let project_dir = project_dir.as_ref();
    match load_config(project_dir, &CONFIG_FILES)? {
        Some(content) => Ok(parse_config(&content)?.resolve_paths(project_dir)),
        None => Ok(ProjectConfig::default()),
    }
}
