//! Ignore patterns for directory processing.
//! Reads `.litdocignore` from the processed directory, one glob per line,
//! similar to .gitignore.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Builds the set of ignore patterns from the file at `ignore_path`.
///
/// # Notes
/// - If the file doesn't exist, only the default patterns are used
/// - Blank lines and lines starting with `#` are skipped
/// - Invalid patterns result in an `IgnoreError`
///
/// # Example
/// ```ignore
/// # Contents of .litdocignore:
/// drafts/**
/// *.tmp.md
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(compile(pattern)?);
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(compile(line)?);
        }
    } else {
        debug!("{} does not exist", ignore_path.as_ref().display());
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("ignore file loading failed: {e}")))
}

fn compile(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| Error::IgnoreError(format!("invalid pattern '{pattern}': {e}")))
}
