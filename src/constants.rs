//! Common constants used throughout litdoc.

/// Supported project configuration file names, in lookup order.
pub const CONFIG_FILES: [&str; 3] = ["litdoc.json", "litdoc.yml", "litdoc.yaml"];

/// Ignore file read from the root of a processed directory.
pub const IGNORE_FILE: &str = ".litdocignore";

/// Patterns always ignored when walking a directory.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 5] =
    ["**/.git/**", "**/.DS_Store", "litdoc.json", "litdoc.yml", "litdoc.yaml"];

/// File name suffix that selects the template engine.
pub const ENGINE_TEMPLATE_SUFFIX: &str = ".j2";

/// Key under which parameters are exposed to engine templates.
pub const ENGINE_NAMESPACE: &str = "properties";

/// Parameter holding the main content produced by the bundled providers.
pub const DOCUMENT_TAG: &str = "document";

/// Parameter appended after the content when no template is given.
pub const TOOLTIPS_KEY: &str = "tooltips";

pub const PAGE_TITLE_KEY: &str = "page-title";
pub const PAGE_SOURCE_KEY: &str = "page-source";
pub const SOURCE_KEY: &str = "source";

/// Extensions handled by the markdown provider.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Script extensions used when the project configuration names none.
pub const DEFAULT_SCRIPT_EXTENSIONS: [&str; 1] = ["rs"];
