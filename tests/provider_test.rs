use litdoc::output::OutputFormat;
use litdoc::parameters::ParameterSet;
use litdoc::provider::{ContentProvider, MarkdownProvider, ProviderSettings, ScriptProvider};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_markdown_provider_html() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("intro.md");
    fs::write(&source, "# Getting *started*\n\nHello.\n").unwrap();

    let content = MarkdownProvider::new(ProviderSettings::default()).produce(&source).unwrap();

    assert_eq!(content.content_tag, "document");
    let params = &content.parameters;
    assert_eq!(params.get("document"), Some("<h1>Getting <em>started</em></h1>\n<p>Hello.</p>\n"));
    assert_eq!(params.get("page-title"), Some("Getting started"));
    assert_eq!(params.get("page-source"), Some("intro.md"));
    assert_eq!(params.get("tooltips"), Some(""));
    assert_eq!(params.get("source"), None);
}

#[test]
fn test_markdown_provider_latex_and_source() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("notes.md");
    fs::write(&source, "Costs 5%.\n").unwrap();

    let settings = ProviderSettings {
        format: OutputFormat::Latex,
        include_source: true,
        replacements: ParameterSet::new(),
    };
    let content = MarkdownProvider::new(settings).produce(&source).unwrap();

    let params = &content.parameters;
    assert_eq!(params.get("document"), Some("Costs 5\\%.\n\n"));
    assert_eq!(params.get("page-title"), Some("notes"));
    assert_eq!(params.get("source"), Some("Costs 5%.\n"));
}

#[test]
fn test_replacements_override_generated_parameters() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("intro.md");
    fs::write(&source, "# Intro\n").unwrap();

    let settings = ProviderSettings {
        replacements: [("page-title", "Custom"), ("project", "litdoc")].into_iter().collect(),
        ..ProviderSettings::default()
    };
    let content = MarkdownProvider::new(settings).produce(&source).unwrap();

    assert_eq!(content.parameters.get("page-title"), Some("Custom"));
    assert_eq!(content.parameters.get("project"), Some("litdoc"));
}

#[test]
fn test_script_provider() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("hello.rs");
    fs::write(&source, "fn main() { let x = 1 < 2 && true; }\n").unwrap();

    let content = ScriptProvider::new(ProviderSettings::default()).produce(&source).unwrap();

    let params = &content.parameters;
    assert_eq!(
        params.get("document"),
        Some("<pre><code class=\"language-rs\">fn main() { let x = 1 &lt; 2 &amp;&amp; true; }\n</code></pre>\n")
    );
    assert_eq!(params.get("page-title"), Some("hello"));
    assert_eq!(params.get("page-source"), Some("hello.rs"));
}

#[test]
fn test_script_provider_latex() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("run.py");
    fs::write(&source, "print(1 % 2)").unwrap();

    let settings = ProviderSettings { format: OutputFormat::Latex, ..ProviderSettings::default() };
    let content = ScriptProvider::new(settings).produce(&source).unwrap();

    assert_eq!(
        content.parameters.get("document"),
        Some("% language: py\n\\begin{verbatim}\nprint(1 % 2)\n\\end{verbatim}\n\n")
    );
}

#[test]
fn test_provider_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result =
        MarkdownProvider::new(ProviderSettings::default()).produce(&temp_dir.path().join("x.md"));
    assert!(result.is_err());
}
