//! Materialization of a template into a destination directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::constants::DEST_PATH_VAR;
use crate::error::ApplyError;
use crate::expander::{expand, ExpansionResult};
use crate::renderer::TemplateRenderer;
use crate::vars::Vars;
use crate::walker::{walk, Entry};

/// Joins a rendered relative path beneath `dest_root`, never above or beside it.
pub fn resolve_target_path<P: AsRef<Path>>(dest_root: P, rendered_path: &str) -> PathBuf {
    dest_root.as_ref().join(rendered_path.trim_start_matches(['/', '\\']))
}

#[cfg(unix)]
fn create_dir(path: &Path, entry: &Entry) -> std::io::Result<()> {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
    fs::DirBuilder::new().recursive(true).mode(entry.permissions.mode()).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path, _entry: &Entry) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(unix)]
fn open_file(path: &Path, entry: &Entry) -> std::io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(entry.permissions.mode())
        .open(path)
}

#[cfg(not(unix))]
fn open_file(path: &Path, _entry: &Entry) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

fn write_result(dest_root: &Path, result: &ExpansionResult) -> Result<(), ApplyError> {
    let target = resolve_target_path(dest_root, &result.rendered_path);
    let write_err = |source| ApplyError::Write { path: target.clone(), source };

    match &result.content {
        None => {
            debug!("Creating directory: {}", target.display());
            create_dir(&target, &result.entry).map_err(write_err)
        }
        Some(content) => {
            debug!("Writing file: {}", target.display());
            let mut file = open_file(&target, &result.entry).map_err(write_err)?;
            file.write_all(content).map_err(write_err)
        }
    }
}

/// Renders the template at `template_root` into `dest_root`.
///
/// `DEST_PATH` is set to `dest_root` before anything is rendered. Every
/// rendered relative path is reported through `progress` once its entry has
/// been written. Existing files are overwritten.
///
/// # Errors
/// * `ApplyError::SourceMissing` / `ApplyError::DestMissing` if either root is absent
/// * `ApplyError::Expansion` if an entry fails to render
/// * `ApplyError::Write` if a directory or file cannot be written
/// * `ApplyError::Walk` if the template tree cannot be traversed
///
/// Entries written before a failure are left in place.
pub fn apply<P, Q, F>(
    renderer: &dyn TemplateRenderer,
    template_root: P,
    dest_root: Q,
    vars: &mut Vars,
    mut progress: F,
) -> Result<(), ApplyError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&str),
{
    let template_root = template_root.as_ref();
    let dest_root = dest_root.as_ref();

    if !template_root.exists() {
        return Err(ApplyError::SourceMissing(template_root.to_path_buf()));
    }
    if !dest_root.exists() {
        return Err(ApplyError::DestMissing(dest_root.to_path_buf()));
    }

    vars.insert(DEST_PATH_VAR.to_string(), Value::String(dest_root.display().to_string()));

    debug!("Applying template {} to {}", template_root.display(), dest_root.display());

    let vars: &Vars = vars;
    walk(template_root, |entry| {
        let result = expand(renderer, entry, vars)?;
        write_result(dest_root, &result)?;
        if !result.rendered_path.is_empty() {
            progress(&result.rendered_path);
        }
        Ok(())
    })
}
