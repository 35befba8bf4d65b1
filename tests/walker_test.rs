use std::fs;
use std::path::PathBuf;

use templ::error::{ApplyError, Error};
use templ::walker::walk;
use tempfile::TempDir;

fn make_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("template.json"), "{}").unwrap();
    fs::write(root.join("b.txt"), "b").unwrap();
    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("a").join("c.txt"), "c").unwrap();
    fs::write(root.join("a").join("Template.Json"), "{}").unwrap();
    temp_dir
}

#[test]
fn test_walk_pre_order() {
    let temp_dir = make_tree();
    let mut visited = Vec::new();

    walk(temp_dir.path(), |entry| -> Result<(), Error> {
        visited.push((entry.relative_path, entry.is_dir));
        Ok(())
    })
    .unwrap();

    assert_eq!(
        visited,
        vec![
            (PathBuf::new(), true),
            (PathBuf::from("a"), true),
            (PathBuf::from("a/c.txt"), false),
            (PathBuf::from("b.txt"), false),
        ]
    );
}

#[test]
fn test_walk_entry_paths() {
    let temp_dir = make_tree();
    let mut paths = Vec::new();

    walk(temp_dir.path(), |entry| -> Result<(), Error> {
        paths.push(entry.path);
        Ok(())
    })
    .unwrap();

    assert_eq!(paths[0], temp_dir.path());
    assert_eq!(paths[2], temp_dir.path().join("a").join("c.txt"));
}

#[test]
fn test_walk_stops_at_first_error() {
    let temp_dir = make_tree();
    let mut count = 0;

    let result = walk(temp_dir.path(), |entry| {
        count += 1;
        Err(ApplyError::SourceMissing(entry.path))
    });

    assert!(matches!(result, Err(ApplyError::SourceMissing(_))));
    assert_eq!(count, 1);
}

#[test]
fn test_walk_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let result = walk(&missing, |_| -> Result<(), Error> { Ok(()) });
    assert!(matches!(result, Err(Error::WalkError(_))));
}

#[cfg(unix)]
#[test]
fn test_walk_follows_symlink_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("inside.txt"), "inside").unwrap();
    std::os::unix::fs::symlink(target.path(), temp_dir.path().join("linked")).unwrap();

    let mut visited = Vec::new();
    walk(temp_dir.path(), |entry| -> Result<(), Error> {
        visited.push((entry.relative_path, entry.is_dir));
        Ok(())
    })
    .unwrap();

    assert_eq!(visited, vec![(PathBuf::new(), true), (PathBuf::from("linked"), true)]);
}
