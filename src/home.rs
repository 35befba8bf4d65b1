//! Location of the template storage and the templates it holds.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{HOME_DIR, HOME_ENV};
use crate::error::Result;

/// Resolves the template storage from `TEMPL_HOME`, falling back to
/// `$HOME/.templ`. `lookup` reads an environment variable.
pub fn resolve_home<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(home) = non_empty(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    non_empty("HOME").map(|home| PathBuf::from(home).join(HOME_DIR))
}

/// Template directories directly under `home`, sorted by name.
pub fn list_templates<P: AsRef<Path>>(home: P) -> Result<Vec<PathBuf>> {
    let mut templates = Vec::new();
    for entry in fs::read_dir(home)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            templates.push(entry.path());
        }
    }
    templates.sort();
    Ok(templates)
}
