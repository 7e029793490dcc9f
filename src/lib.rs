//! litdoc renders markdown documents and scripts into HTML or LaTeX pages.
//! Content is produced by providers, then either rendered through a
//! MiniJinja template or substituted into a plain `{name}` placeholder
//! template, and finally written to disk.

/// Command-line interface
pub mod cli;

/// Project configuration file and per-operation options
/// Supports litdoc.json, litdoc.yml and litdoc.yaml
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Ignore patterns for directory processing (.litdocignore)
pub mod ignore;

/// LaTeX writer for markdown events
pub mod latex;

/// Logger setup for the binary
pub mod logger;

/// Output formats, output path defaulting and the output writer
pub mod output;

/// Parameter sets and provider output
pub mod parameters;

/// Collision-safe `{name}` placeholder substitution
pub mod placeholder;

/// Single document and directory processing
pub mod processor;

/// Content providers for markdown and scripts
pub mod provider;

/// Rendering orchestration
pub mod render;

/// Template engine integration
pub mod renderer;

/// Template strategy resolution
pub mod template;
