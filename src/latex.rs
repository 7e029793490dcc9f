//! LaTeX writer for markdown events.
//!
//! Counterpart of `pulldown_cmark::html::push_html` for the LaTeX output
//! format. Only the constructs that have an obvious LaTeX rendering are
//! emitted; raw HTML is dropped.

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Tag, TagEnd};
use std::collections::HashMap;

const VERBATIM_END: &str = "\\end{verbatim}";

/// Appends the LaTeX rendering of `events` to `out`.
///
/// Footnote definitions are rendered inline as `\footnote{}` at their
/// first reference; references without a definition become superscripts.
pub fn push_latex<'a, I>(out: &mut String, events: I)
where
    I: Iterator<Item = Event<'a>>,
{
    let events: Vec<Event<'a>> = events.collect();
    let footnotes = collect_footnotes(&events);
    let mut writer = LatexWriter::new(out, &footnotes);

    let mut definition_depth = 0usize;
    for event in events {
        match event {
            Event::Start(Tag::FootnoteDefinition(_)) => definition_depth += 1,
            Event::End(TagEnd::FootnoteDefinition) => {
                definition_depth = definition_depth.saturating_sub(1)
            }
            event if definition_depth == 0 => writer.event(event),
            _ => {}
        }
    }
}

/// Renders every footnote definition body, keyed by label.
fn collect_footnotes(events: &[Event<'_>]) -> HashMap<String, String> {
    let mut footnotes = HashMap::new();
    let no_footnotes = HashMap::new();

    let mut iter = events.iter();
    while let Some(event) = iter.next() {
        if let Event::Start(Tag::FootnoteDefinition(label)) = event {
            let mut body = String::new();
            let mut writer = LatexWriter::new(&mut body, &no_footnotes);
            for inner in iter.by_ref() {
                if matches!(inner, Event::End(TagEnd::FootnoteDefinition)) {
                    break;
                }
                writer.event(inner.clone());
            }
            footnotes.insert(label.to_string(), body.trim_end().to_string());
        }
    }
    footnotes
}

struct LatexWriter<'w, 'f> {
    out: &'w mut String,
    footnotes: &'f HashMap<String, String>,
    /// Text of the code block being read, emitted at its end
    code: Option<String>,
    /// Cells already written in the current table row
    table_cell: usize,
}

impl<'w, 'f> LatexWriter<'w, 'f> {
    fn new(out: &'w mut String, footnotes: &'f HashMap<String, String>) -> Self {
        Self { out, footnotes, code: None, table_cell: 0 }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => match &mut self.code {
                Some(code) => code.push_str(&text),
                None => self.out.push_str(&escape_latex(&text)),
            },
            Event::Code(code) => {
                self.out.push_str("\\texttt{");
                self.out.push_str(&escape_latex(&code));
                self.out.push('}');
            }
            Event::FootnoteReference(label) => match self.footnotes.get(&*label) {
                Some(body) => {
                    self.out.push_str("\\footnote{");
                    self.out.push_str(body);
                    self.out.push('}');
                }
                None => {
                    self.out.push_str("\\textsuperscript{");
                    self.out.push_str(&escape_latex(&label));
                    self.out.push('}');
                }
            },
            Event::SoftBreak => self.out.push('\n'),
            Event::HardBreak => self.out.push_str("\\\\\n"),
            Event::Rule => self.out.push_str("\\noindent\\rule{\\textwidth}{0.4pt}\n\n"),
            Event::TaskListMarker(checked) => {
                self.out.push_str(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let out = &mut *self.out;
        match tag {
            Tag::Heading { level, .. } => {
                out.push('\\');
                out.push_str(heading_command(level));
                out.push('{');
            }
            Tag::BlockQuote { .. } => out.push_str("\\begin{quote}\n"),
            Tag::CodeBlock(kind) => {
                if let CodeBlockKind::Fenced(lang) = &kind {
                    if !lang.is_empty() {
                        out.push_str("% language: ");
                        out.push_str(lang);
                        out.push('\n');
                    }
                }
                self.code = Some(String::new());
            }
            Tag::List(Some(_)) => out.push_str("\\begin{enumerate}\n"),
            Tag::List(None) => out.push_str("\\begin{itemize}\n"),
            Tag::Item => out.push_str("\\item "),
            Tag::Table(alignments) => {
                out.push_str("\\begin{tabular}{");
                out.extend(alignments.iter().map(column_spec));
                out.push_str("}\n");
            }
            Tag::TableHead | Tag::TableRow => self.table_cell = 0,
            Tag::TableCell => {
                if self.table_cell > 0 {
                    out.push_str(" & ");
                }
                self.table_cell += 1;
            }
            Tag::Emphasis => out.push_str("\\emph{"),
            Tag::Strong => out.push_str("\\textbf{"),
            Tag::Strikethrough => out.push_str("\\sout{"),
            Tag::Link { dest_url, .. } => {
                out.push_str("\\href{");
                out.push_str(&escape_url(&dest_url));
                out.push_str("}{");
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        let out = &mut *self.out;
        match tag {
            TagEnd::Paragraph => out.push_str("\n\n"),
            TagEnd::Heading(_) => out.push_str("}\n\n"),
            TagEnd::BlockQuote { .. } => out.push_str("\\end{quote}\n\n"),
            TagEnd::CodeBlock => {
                let code = self.code.take().unwrap_or_default();
                push_verbatim(out, &code);
            }
            TagEnd::List(true) => out.push_str("\\end{enumerate}\n\n"),
            TagEnd::List(false) => out.push_str("\\end{itemize}\n\n"),
            TagEnd::Item => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            TagEnd::TableHead => out.push_str(" \\\\\n\\hline\n"),
            TagEnd::TableRow => out.push_str(" \\\\\n"),
            TagEnd::Table => out.push_str("\\end{tabular}\n\n"),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                out.push('}')
            }
            _ => {}
        }
    }
}

/// Writes `code` in a verbatim environment.
///
/// A line containing `\end{verbatim}` would close the environment early, so
/// such lines are set in `\texttt` between two verbatim blocks.
fn push_verbatim(out: &mut String, code: &str) {
    out.push_str("\\begin{verbatim}\n");
    for line in code.lines() {
        if line.contains(VERBATIM_END) {
            out.push_str(VERBATIM_END);
            out.push_str("\n\\noindent\\texttt{");
            out.push_str(&escape_latex(line));
            out.push_str("}\n\\begin{verbatim}\n");
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(VERBATIM_END);
    out.push_str("\n\n");
}

fn column_spec(alignment: &Alignment) -> char {
    match alignment {
        Alignment::None | Alignment::Left => 'l',
        Alignment::Center => 'c',
        Alignment::Right => 'r',
    }
}

fn heading_command(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "section",
        HeadingLevel::H2 => "subsection",
        HeadingLevel::H3 => "subsubsection",
        HeadingLevel::H4 => "paragraph",
        HeadingLevel::H5 | HeadingLevel::H6 => "subparagraph",
    }
}

/// Escapes characters with a special meaning in LaTeX text.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '{' | '}' | '$' | '&' | '#' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '\\' | '%' | '#' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
