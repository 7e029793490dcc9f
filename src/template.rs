//! Template resolution: decides how a document is turned into final text.

use crate::constants::ENGINE_TEMPLATE_SUFFIX;
use log::debug;
use std::path::Path;

/// Rendering strategy selected for a template reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStrategy<'a> {
    /// Render with the template engine using this template file.
    Engine(&'a Path),
    /// Substitute `{name}` placeholders into this plain text template, or
    /// emit content and tooltips when there is none.
    Fallback(Option<&'a Path>),
}

/// Returns true if the file name ends with the engine suffix, ignoring ASCII case.
pub fn is_engine_template<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(ENGINE_TEMPLATE_SUFFIX))
        .unwrap_or(false)
}

/// Selects the rendering strategy for an optional template.
///
/// A template whose name does not carry the engine suffix is treated as a
/// plain text template, never as an error.
pub fn resolve_template(template: Option<&Path>) -> TemplateStrategy<'_> {
    match template {
        Some(path) if is_engine_template(path) => {
            debug!("Using template engine for {}", path.display());
            TemplateStrategy::Engine(path)
        }
        Some(path) => {
            debug!("Using placeholder substitution for {}", path.display());
            TemplateStrategy::Fallback(Some(path))
        }
        None => {
            debug!("No template given, writing content and tooltips only");
            TemplateStrategy::Fallback(None)
        }
    }
}
