//! Expansion of a single template entry: its name and, for files, its content.

use std::path::Path;

use log::debug;

use crate::error::ExpandError;
use crate::renderer::TemplateRenderer;
use crate::vars::Vars;
use crate::walker::Entry;

/// A rendered template entry.
#[derive(Debug)]
pub struct ExpansionResult {
    /// Rendered path relative to the destination root
    pub rendered_path: String,
    /// Rendered content, `None` for directories
    pub content: Option<Vec<u8>>,
    /// The entry the result was rendered from
    pub entry: Entry,
}

/// Renders the relative path of `entry` and, if it is a file, its content.
///
/// Content that is not valid UTF-8 is returned untouched.
///
/// # Errors
/// * `ExpandError::NamePattern` if the relative path fails to render
/// * `ExpandError::Read` if the file cannot be read
/// * `ExpandError::ContentPattern` if the content fails to render
pub fn expand(
    renderer: &dyn TemplateRenderer,
    entry: Entry,
    vars: &Vars,
) -> Result<ExpansionResult, ExpandError> {
    let relative_path = entry.relative_path.to_string_lossy().into_owned();

    let rendered_path = renderer
        .render(&relative_path, vars)
        .map_err(|source| ExpandError::NamePattern { path: relative_path.clone(), source })?;

    debug!("Expanded name '{relative_path}' to '{rendered_path}'");

    if entry.is_dir {
        return Ok(ExpansionResult { rendered_path, content: None, entry });
    }

    let raw = std::fs::read(&entry.path)
        .map_err(|source| ExpandError::Read { path: relative_path.clone(), source })?;

    let content = match String::from_utf8(raw) {
        Ok(text) => renderer
            .render(&text, vars)
            .map_err(|source| ExpandError::ContentPattern { path: relative_path, source })?
            .into_bytes(),
        Err(err) => {
            debug!("Copying non-text content of '{}' verbatim", entry.path.display());
            err.into_bytes()
        }
    };

    Ok(ExpansionResult { rendered_path, content: Some(content), entry })
}

/// Expands the entry at `path`, which has to live beneath `root`.
pub fn expand_path<P: AsRef<Path>, Q: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    root: P,
    path: Q,
    vars: &Vars,
) -> Result<ExpansionResult, ExpandError> {
    let path = path.as_ref();
    let entry = Entry::from_path(root, path).map_err(|source| ExpandError::Read {
        path: path.display().to_string(),
        source,
    })?;
    expand(renderer, entry, vars)
}
