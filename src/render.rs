//! Rendering orchestration: resolves the template strategy for a document,
//! renders it and hands the result to the output writer.

use crate::constants::ENGINE_NAMESPACE;
use crate::error::{Error, Result};
use crate::output::write_output;
use crate::parameters::Content;
use crate::placeholder::substitute;
use crate::renderer::TemplateRenderer;
use crate::template::{resolve_template, TemplateStrategy};
use std::path::{Path, PathBuf};

/// Renders `content` with the strategy chosen for `template`.
///
/// # Arguments
/// * `renderer` - Engine used when `template` is an engine template
/// * `template` - Optional template reference
/// * `layout_roots` - Extra engine search directories, searched after the
///   template's own directory
/// * `content` - Parameters and content tag produced by a provider
///
/// # Errors
/// * `Error::MissingParameter` in the no-template path
/// * `Error::MinijinjaError` if the engine fails
/// * `Error::IoError` if a plain text template cannot be read
pub fn render(
    renderer: &dyn TemplateRenderer,
    template: Option<&Path>,
    layout_roots: &[PathBuf],
    content: &Content,
) -> Result<String> {
    match resolve_template(template) {
        TemplateStrategy::Engine(path) => {
            let name = path.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
                Error::ConfigError(format!("invalid template path: {}", path.display()))
            })?;

            let mut search_dirs = Vec::with_capacity(layout_roots.len() + 1);
            search_dirs.push(template_dir(path));
            search_dirs.extend(layout_roots.iter().cloned());

            // Parameters live under one key so they never shadow engine globals.
            let context = serde_json::json!({ ENGINE_NAMESPACE: content.parameters });
            renderer.render_file(&search_dirs, name, &context)
        }
        TemplateStrategy::Fallback(Some(path)) => {
            let raw = std::fs::read_to_string(path).map_err(Error::IoError)?;
            substitute(Some(&raw), &content.content_tag, &content.parameters)
        }
        TemplateStrategy::Fallback(None) => {
            substitute(None, &content.content_tag, &content.parameters)
        }
    }
}

/// Renders `content` and writes the result to `output`, overwriting it.
pub fn render_to_file(
    renderer: &dyn TemplateRenderer,
    template: Option<&Path>,
    layout_roots: &[PathBuf],
    content: &Content,
    output: &Path,
) -> Result<()> {
    let text = render(renderer, template, layout_roots, content)?;
    write_output(output, &text)
}

fn template_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
