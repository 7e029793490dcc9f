//! Template engine integration.
//! Renders engine templates found in a list of search directories with
//! MiniJinja.
use crate::error::{Error, Result};
use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::path::PathBuf;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template `name`, looked up in `search_dirs` in order.
    ///
    /// # Arguments
    /// * `search_dirs` - Directories searched for `name` and for any
    ///   template it extends or includes
    /// * `name` - Template file name relative to a search directory
    /// * `context` - Data exposed to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render_file(
        &self,
        search_dirs: &[PathBuf],
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// Base environment, cloned for every render call
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on any reference to an undefined value.
    ///
    /// Auto-escaping is off: parameters carry already rendered fragments.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - the template is not found in any search directory
    ///   - the template fails to compile
    ///   - rendering fails, including references to undefined values
    fn render_file(
        &self,
        search_dirs: &[PathBuf],
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        debug!("Rendering '{}' with search path {:?}", name, search_dirs);

        let loaders: Vec<_> =
            search_dirs.iter().map(|dir| minijinja::path_loader(dir.clone())).collect();
        let mut env = self.env.clone();
        env.set_loader(move |name| {
            for loader in &loaders {
                if let Some(source) = loader(name)? {
                    return Ok(Some(source));
                }
            }
            Ok(None)
        });

        let tmpl = env.get_template(name).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
