//! Document processing: ties providers, rendering and output together for
//! single documents and for whole directories.

use crate::config::{DirectoryOptions, DocumentOptions};
use crate::constants::{DEFAULT_SCRIPT_EXTENSIONS, IGNORE_FILE, MARKDOWN_EXTENSIONS};
use crate::error::{Error, Result};
use crate::ignore::parse_ignore_file;
use crate::output::{default_output, OutputFormat};
use crate::provider::{ContentProvider, MarkdownProvider, ScriptProvider};
use crate::render::render_to_file;
use crate::renderer::TemplateRenderer;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of source document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Markdown,
    Script,
}

/// Renders a markdown file and returns the path written.
pub fn process_markdown<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    input: P,
    options: &DocumentOptions,
) -> Result<PathBuf> {
    let provider = MarkdownProvider::new(options.provider_settings());
    process_document(renderer, &provider, input.as_ref(), options)
}

/// Renders a script file and returns the path written.
pub fn process_script<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    input: P,
    options: &DocumentOptions,
) -> Result<PathBuf> {
    let provider = ScriptProvider::new(options.provider_settings());
    process_document(renderer, &provider, input.as_ref(), options)
}

fn process_document(
    renderer: &dyn TemplateRenderer,
    provider: &dyn ContentProvider,
    input: &Path,
    options: &DocumentOptions,
) -> Result<PathBuf> {
    let output = default_output(options.output.as_deref(), input, options.format);
    if same_file(&output, input) {
        return Err(Error::ProviderError {
            path: input.display().to_string(),
            reason: "output would overwrite the input".to_string(),
        });
    }
    let content = provider.produce(input)?;
    render_to_file(
        renderer,
        options.template.as_deref(),
        &options.layout_roots,
        &content,
        &output,
    )?;
    Ok(output)
}

/// Renders every markdown and script document under `input_dir`.
///
/// The directory layout is mirrored under `options.output_dir`, with each
/// file's extension replaced by the output format's. Entries matched by
/// `.litdocignore` or the default patterns are skipped. The first failure
/// aborts the walk, including two documents mapping to the same output path
/// (`intro.md` and `intro.rs`).
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in walk order
pub fn process_directory<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    input_dir: P,
    options: &DirectoryOptions,
) -> Result<Vec<PathBuf>> {
    let input_dir = input_dir.as_ref();
    if !input_dir.is_dir() {
        return Err(Error::ProviderError {
            path: input_dir.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    let ignored = parse_ignore_file(input_dir.join(IGNORE_FILE))?;
    let format = options.format.unwrap_or_default();
    let script_extensions = script_extensions(options);
    let markdown = MarkdownProvider::new(options.provider_settings());
    let script = ScriptProvider::new(options.provider_settings());

    let mut written = Vec::new();
    let mut sources: HashMap<PathBuf, PathBuf> = HashMap::new();
    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(input_dir).map_err(|e| Error::ProviderError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        if relative == Path::new(IGNORE_FILE) || ignored.is_match(relative) {
            debug!("Skipping ignored file {}", relative.display());
            continue;
        }

        let provider: &dyn ContentProvider = match document_kind(path, &script_extensions) {
            Some(DocumentKind::Markdown) => &markdown,
            Some(DocumentKind::Script) => &script,
            None => {
                warn!("Skipping unsupported file {}", relative.display());
                continue;
            }
        };

        let target = resolve_target_path(relative, &options.output_dir, format);
        if let Some(first) = sources.get(&target) {
            return Err(Error::ProviderError {
                path: path.display().to_string(),
                reason: format!(
                    "output '{}' is already generated from '{}'",
                    target.display(),
                    first.display()
                ),
            });
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        let content = provider.produce(path)?;
        render_to_file(
            renderer,
            options.template.as_deref(),
            &options.layout_roots,
            &content,
            &target,
        )?;
        info!("Generated '{}'", target.display());
        sources.insert(target.clone(), path.to_path_buf());
        written.push(target);
    }

    Ok(written)
}

/// Compares canonical paths when both exist, the paths as given otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn script_extensions(options: &DirectoryOptions) -> Vec<String> {
    if options.script_extensions.is_empty() {
        DEFAULT_SCRIPT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
    } else {
        options
            .script_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }
}

/// Classifies `path` by extension, ignoring ASCII case.
pub fn document_kind<P: AsRef<Path>>(
    path: P,
    script_extensions: &[String],
) -> Option<DocumentKind> {
    let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    if MARKDOWN_EXTENSIONS.contains(&extension.as_str()) {
        Some(DocumentKind::Markdown)
    } else if script_extensions.iter().any(|ext| ext.eq_ignore_ascii_case(&extension)) {
        Some(DocumentKind::Script)
    } else {
        None
    }
}

/// Maps a path relative to the input directory to its output path.
pub fn resolve_target_path<P: AsRef<Path>, Q: AsRef<Path>>(
    relative: P,
    output_dir: Q,
    format: OutputFormat,
) -> PathBuf {
    output_dir.as_ref().join(relative.as_ref()).with_extension(format.extension())
}
