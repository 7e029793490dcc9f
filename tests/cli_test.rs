use clap::Parser;
use litdoc::cli::{parse_replacement, Args, Command};
use litdoc::output::OutputFormat;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("litdoc")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_markdown_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["markdown", "doc.md"])).unwrap();

    assert!(!parsed.verbose);
    match parsed.command {
        Command::Markdown { input, output, render } => {
            assert_eq!(input, PathBuf::from("doc.md"));
            assert_eq!(output, None);
            assert_eq!(render.template, None);
            assert_eq!(render.format, None);
            assert!(render.replacements.is_empty());
            assert!(!render.include_source);
        }
        other => panic!("Expected markdown command, got {other:?}"),
    }
}

#[test]
fn test_all_render_flags() {
    let args = make_args(&[
        "script",
        "main.rs",
        "-o",
        "out/main.tex",
        "--template",
        "page.tex.j2",
        "--format",
        "latex",
        "--layout-root",
        "layouts",
        "--layout-root",
        "shared",
        "-r",
        "project=litdoc",
        "--replace",
        "query=a=b",
        "--include-source",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    match parsed.command {
        Command::Script { input, output, render } => {
            assert_eq!(input, PathBuf::from("main.rs"));
            assert_eq!(output, Some(PathBuf::from("out/main.tex")));
            assert_eq!(render.template, Some(PathBuf::from("page.tex.j2")));
            assert_eq!(render.format, Some(OutputFormat::Latex));
            assert_eq!(
                render.layout_roots,
                vec![PathBuf::from("layouts"), PathBuf::from("shared")]
            );
            assert_eq!(
                render.replacements,
                vec![
                    ("project".to_string(), "litdoc".to_string()),
                    ("query".to_string(), "a=b".to_string())
                ]
            );
            assert!(render.include_source);
        }
        other => panic!("Expected script command, got {other:?}"),
    }
}

#[test]
fn test_directory_args() {
    let args = make_args(&["-v", "directory", "docs", "site", "--script-ext", "py"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    match parsed.command {
        Command::Directory { input_dir, output_dir, script_extensions, .. } => {
            assert_eq!(input_dir, PathBuf::from("docs"));
            assert_eq!(output_dir, PathBuf::from("site"));
            assert_eq!(script_extensions, vec!["py".to_string()]);
        }
        other => panic!("Expected directory command, got {other:?}"),
    }
}

#[test]
fn test_document_options_from_args() {
    let parsed =
        Args::try_parse_from(make_args(&["markdown", "doc.md", "-r", "a=1", "-r", "a=2"])).unwrap();
    let Command::Markdown { output, render, .. } = parsed.command else {
        panic!("Expected markdown command");
    };
    let options = render.document_options(output);

    assert_eq!(options.replacements.get("a"), Some("2"));
    assert_eq!(options.output, None);
}

#[test]
fn test_invalid_format() {
    assert!(Args::try_parse_from(make_args(&["markdown", "doc.md", "--format", "pdf"])).is_err());
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&["directory", "docs"])).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_parse_replacement() {
    assert_eq!(parse_replacement("k=v"), Ok(("k".to_string(), "v".to_string())));
    assert_eq!(parse_replacement("k="), Ok(("k".to_string(), String::new())));
    assert!(parse_replacement("novalue").is_err());
    assert!(parse_replacement("=v").is_err());
}

#[test]
fn test_include_source_flags() {
    let include_source = |flags: &[&str]| {
        let mut args = vec!["markdown", "doc.md"];
        args.extend_from_slice(flags);
        let parsed = Args::try_parse_from(make_args(&args)).unwrap();
        let Command::Markdown { render, .. } = parsed.command else {
            panic!("Expected markdown command");
        };
        render.document_options(None).include_source
    };

    assert_eq!(include_source(&[]), None);
    assert_eq!(include_source(&["--include-source"]), Some(true));
    assert_eq!(include_source(&["--no-include-source"]), Some(false));
    assert_eq!(include_source(&["--include-source", "--no-include-source"]), Some(false));
    assert_eq!(include_source(&["--no-include-source", "--include-source"]), Some(true));
}
