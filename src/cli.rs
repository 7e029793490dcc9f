//! Command-line interface implementation for litdoc.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{DirectoryOptions, DocumentOptions};
use crate::output::OutputFormat;
use crate::parameters::ParameterSet;
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for litdoc.
#[derive(Parser, Debug)]
#[command(author, version, about = "litdoc: render markdown and scripts into documentation pages", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single markdown file
    Markdown {
        /// Markdown file to render
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file, defaults to INPUT with the format's extension
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a single script file as a code listing
    Script {
        /// Script file to render
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file, defaults to INPUT with the format's extension
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render every markdown and script file under a directory
    Directory {
        /// Directory to walk
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// Directory receiving the generated tree
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Extension rendered as a script (repeatable)
        #[arg(long = "script-ext", value_name = "EXT")]
        script_extensions: Vec<String>,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct RenderArgs {
    /// Template file. Files ending in `.j2` are rendered with the template
    /// engine, any other file is treated as a `{name}` placeholder template
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Additional template search directory (repeatable)
    #[arg(long = "layout-root", value_name = "DIR")]
    pub layout_roots: Vec<PathBuf>,

    /// Extra template parameter (repeatable)
    #[arg(short, long = "replace", value_name = "KEY=VALUE", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,

    /// Expose the raw source text as the `source` parameter
    #[arg(long, overrides_with = "no_include_source")]
    pub include_source: bool,

    /// Do not expose the raw source text, even if the project config does
    #[arg(long, overrides_with = "include_source")]
    pub no_include_source: bool,
}

/// Parses a `KEY=VALUE` pair. The value may itself contain `=`.
pub fn parse_replacement(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

impl RenderArgs {
    /// `None` when neither flag is given, so the project config decides.
    pub fn include_source(&self) -> Option<bool> {
        match (self.include_source, self.no_include_source) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn replacements(&self) -> ParameterSet {
        self.replacements.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    pub fn document_options(&self, output: Option<PathBuf>) -> DocumentOptions {
        DocumentOptions {
            template: self.template.clone(),
            output,
            format: self.format,
            replacements: self.replacements(),
            layout_roots: self.layout_roots.clone(),
            include_source: self.include_source(),
        }
    }

    pub fn directory_options(
        &self,
        output_dir: PathBuf,
        script_extensions: Vec<String>,
    ) -> DirectoryOptions {
        DirectoryOptions {
            template: self.template.clone(),
            output_dir,
            format: self.format,
            replacements: self.replacements(),
            layout_roots: self.layout_roots.clone(),
            include_source: self.include_source(),
            script_extensions,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
