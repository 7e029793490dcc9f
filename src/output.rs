//! Output format selection, output path defaulting and the output writer.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Format of the generated pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Latex,
}

impl OutputFormat {
    /// File extension of documents written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Latex => "tex",
        }
    }
}

/// Returns the explicit output path, or derives one from `input` by
/// swapping its extension for the one implied by `format` (HTML when unset).
pub fn default_output<P: AsRef<Path>>(
    explicit: Option<&Path>,
    input: P,
    format: Option<OutputFormat>,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.as_ref().with_extension(format.unwrap_or_default().extension()),
    }
}

/// Writes `content` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing output to {}", path.display());
    std::fs::write(path, content).map_err(Error::IoError)
}
