//! litdoc's main application entry point.
//! Parses the command line, merges the project configuration and runs the
//! requested processing operation.

use std::path::{Path, PathBuf};

use litdoc::{
    cli::{get_args, Args, Command},
    config::get_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{process_directory, process_markdown, process_script},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Directory searched for the project configuration of a single file.
fn project_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the project configuration next to the input
/// 2. Fills unset command-line options from it
/// 3. Renders the document(s) and reports the files written
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();

    match args.command {
        Command::Markdown { input, output, render } => {
            let config = get_config(project_dir(&input))?;
            let options = config.apply_to_document(render.document_options(output));
            let written = process_markdown(&renderer, &input, &options)?;
            println!("Generated: '{}'", written.display());
        }
        Command::Script { input, output, render } => {
            let config = get_config(project_dir(&input))?;
            let options = config.apply_to_document(render.document_options(output));
            let written = process_script(&renderer, &input, &options)?;
            println!("Generated: '{}'", written.display());
        }
        Command::Directory { input_dir, output_dir, script_extensions, render } => {
            let config = get_config(&input_dir)?;
            let options =
                config.apply_to_directory(render.directory_options(output_dir, script_extensions));
            let written = process_directory(&renderer, &input_dir, &options)?;
            println!(
                "Documentation generation completed: {} file(s) in {}.",
                written.len(),
                options.output_dir.display()
            );
        }
    }

    Ok(())
}
