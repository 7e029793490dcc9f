//! Content providers turn source documents into a rendered fragment plus the
//! named parameters available to templates.
//!
//! Markdown parsing is delegated to `pulldown-cmark`; scripts are rendered
//! as a single code listing. Both produce the same parameter keys:
//!
//! * `document` - the fragment in the requested output format
//! * `tooltips` - always empty for the bundled providers
//! * `page-title` - first heading of a markdown file, else the file stem
//! * `page-source` - file name of the source document
//! * `source` - the raw source text, only when `include_source` is set
//!
//! User replacements are applied last and may override any of these.

use crate::constants::{
    DOCUMENT_TAG, PAGE_SOURCE_KEY, PAGE_TITLE_KEY, SOURCE_KEY, TOOLTIPS_KEY,
};
use crate::error::{Error, Result};
use crate::latex::push_latex;
use crate::output::OutputFormat;
use crate::parameters::{Content, ParameterSet};
use log::debug;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::path::Path;

/// Produces [`Content`] from a source document.
pub trait ContentProvider {
    fn produce(&self, source: &Path) -> Result<Content>;
}

/// Settings shared by the bundled providers.
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    pub format: OutputFormat,
    /// Expose the raw source text as the `source` parameter
    pub include_source: bool,
    /// Extra parameters, applied after the generated ones
    pub replacements: ParameterSet,
}

/// Renders markdown documents.
pub struct MarkdownProvider {
    settings: ProviderSettings,
}

impl MarkdownProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

impl ContentProvider for MarkdownProvider {
    fn produce(&self, source: &Path) -> Result<Content> {
        let text = std::fs::read_to_string(source).map_err(Error::IoError)?;
        debug!("Parsing markdown {}", source.display());

        let events: Vec<Event> = Parser::new_ext(&text, markdown_options()).collect();
        let title = match first_heading(&events) {
            Some(title) => title,
            None => file_stem(source)?,
        };
        let fragment = render_fragment(self.settings.format, events.into_iter());

        build_content(source, &text, title, fragment, &self.settings)
    }
}

/// Renders a script as one code listing, labelled with its file extension.
pub struct ScriptProvider {
    settings: ProviderSettings,
}

impl ScriptProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

impl ContentProvider for ScriptProvider {
    fn produce(&self, source: &Path) -> Result<Content> {
        let text = std::fs::read_to_string(source).map_err(Error::IoError)?;
        debug!("Formatting script {}", source.display());

        let language =
            source.extension().and_then(|ext| ext.to_str()).unwrap_or_default().to_string();
        let events = vec![
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(CowStr::from(language)))),
            Event::Text(CowStr::Borrowed(&text)),
            Event::End(TagEnd::CodeBlock),
        ];
        let fragment = render_fragment(self.settings.format, events.into_iter());

        build_content(source, &text, file_stem(source)?, fragment, &self.settings)
    }
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH
}

/// Renders markdown events in the given output format.
pub fn render_fragment<'a, I>(format: OutputFormat, events: I) -> String
where
    I: Iterator<Item = Event<'a>>,
{
    let mut out = String::new();
    match format {
        OutputFormat::Html => html::push_html(&mut out, events),
        OutputFormat::Latex => push_latex(&mut out, events),
    }
    out
}

/// Plain text of the first heading, if any.
fn first_heading(events: &[Event]) -> Option<String> {
    let start = events.iter().position(|e| matches!(e, Event::Start(Tag::Heading { .. })))?;
    let mut title = String::new();
    for event in &events[start + 1..] {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(text) | Event::Code(text) => title.push_str(text),
            _ => {}
        }
    }
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn file_stem(source: &Path) -> Result<String> {
    source.file_stem().and_then(|stem| stem.to_str()).map(str::to_string).ok_or_else(|| {
        Error::ProviderError {
            path: source.display().to_string(),
            reason: "file name is not valid UTF-8".to_string(),
        }
    })
}

fn build_content(
    source: &Path,
    text: &str,
    title: String,
    fragment: String,
    settings: &ProviderSettings,
) -> Result<Content> {
    let page_source = source
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let mut parameters = ParameterSet::new();
    parameters.insert(PAGE_TITLE_KEY, title);
    parameters.insert(PAGE_SOURCE_KEY, page_source);
    parameters.insert(DOCUMENT_TAG, fragment);
    parameters.insert(TOOLTIPS_KEY, "");
    if settings.include_source {
        parameters.insert(SOURCE_KEY, text);
    }
    for (name, value) in settings.replacements.iter() {
        parameters.insert(name, value);
    }

    Ok(Content::new(DOCUMENT_TAG, parameters))
}
