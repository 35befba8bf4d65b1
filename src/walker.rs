//! Template tree traversal.

use std::fs::Permissions;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::{DirEntry, WalkDir};

use crate::constants::DEFINITION_FILE;

/// One filesystem node below a template root.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Location of the node on disk
    pub path: PathBuf,
    /// Location relative to the template root, empty for the root itself
    pub relative_path: PathBuf,
    pub is_dir: bool,
    pub permissions: Permissions,
}

impl Entry {
    /// Builds an entry for `path`, which has to live beneath `root`.
    pub fn from_path<P: AsRef<Path>, Q: AsRef<Path>>(root: P, path: Q) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            relative_path: relative_to(root.as_ref(), path),
            is_dir: metadata.is_dir(),
            permissions: metadata.permissions(),
        })
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_default()
}

/// Returns true for the definition file, whatever its case.
pub fn is_definition_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(DEFINITION_FILE))
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_definition_file(entry.path())
}

/// Visits every entry below `root` in pre-order, the root first and
/// siblings sorted by name. The definition file is never visited.
///
/// Entry type and permissions follow symlinks, so a link to a directory is
/// a directory entry; its target is not descended into.
///
/// The first error, raised either by the walk itself or by `visit`,
/// stops the traversal and is returned.
pub fn walk<P, F, E>(root: P, mut visit: F) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(Entry) -> Result<(), E>,
    E: From<walkdir::Error> + From<std::io::Error>,
{
    let root = root.as_ref();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
        let skip = is_skipped(entry);
        if skip {
            trace!("Skipping definition file {}", entry.path().display());
        }
        !skip
    });

    for dir_entry in walker {
        let dir_entry = dir_entry?;
        let metadata = std::fs::metadata(dir_entry.path())?;
        let entry = Entry {
            path: dir_entry.path().to_path_buf(),
            relative_path: relative_to(root, dir_entry.path()),
            is_dir: metadata.is_dir(),
            permissions: metadata.permissions(),
        };
        visit(entry)?;
    }
    Ok(())
}
