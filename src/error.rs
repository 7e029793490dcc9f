//! Error handling for litdoc.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while producing, rendering or writing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// File system failure while reading a template or writing output.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template engine failed to compile or render a template.
    #[error("Template engine error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A parameter required by the no-template rendering path is absent.
    #[error("Missing parameter '{name}'.")]
    MissingParameter { name: String },

    /// The project configuration or a command-line pair could not be parsed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// An ignore pattern could not be compiled.
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    /// A content provider could not turn a source into content.
    #[error("Cannot process '{path}': {reason}.")]
    ProviderError { path: String, reason: String },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
