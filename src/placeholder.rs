//! Placeholder substitution used when no template engine is involved.
//!
//! A template is plain text containing `{name}` placeholders. Substitution
//! runs in two phases: every known placeholder is first renamed into a
//! namespace keyed by a fresh random token, and only then are the renamed
//! placeholders replaced by their values. Values are therefore never
//! rescanned, even if they contain `{other}`-shaped text.

use crate::constants::TOOLTIPS_KEY;
use crate::error::Result;
use crate::parameters::ParameterSet;
use uuid::Uuid;

/// Produces the final text for the fallback strategy.
///
/// Without a template the output is the content entry followed by a blank
/// line and the tooltips entry.
///
/// # Errors
/// * `Error::MissingParameter` if there is no template and either
///   `content_tag` or `tooltips` is absent
pub fn substitute(
    template: Option<&str>,
    content_tag: &str,
    parameters: &ParameterSet,
) -> Result<String> {
    match template {
        Some(template) => Ok(replace_placeholders(template, parameters)),
        None => {
            let content = parameters.require(content_tag)?;
            let tooltips = parameters.require(TOOLTIPS_KEY)?;
            Ok(format!("{content}\n\n{tooltips}"))
        }
    }
}

/// Replaces every `{name}` in `template` with the value of `name`.
///
/// Placeholders without a matching parameter are left untouched.
pub fn replace_placeholders(template: &str, parameters: &ParameterSet) -> String {
    let token = Uuid::new_v4().simple().to_string();

    let mut text = template.to_string();
    for (name, _) in parameters.iter() {
        text = text.replace(&placeholder(name, ""), &placeholder(name, &token));
    }
    for (name, value) in parameters.iter() {
        text = text.replace(&placeholder(name, &token), value);
    }
    text
}

fn placeholder(name: &str, token: &str) -> String {
    format!("{{{name}{token}}}")
}
