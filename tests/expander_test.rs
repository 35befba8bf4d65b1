use std::fs;

use templ::error::{ExpandError, RenderError};
use templ::expander::{expand, expand_path};
use templ::renderer::MiniJinjaRenderer;
use templ::vars::Vars;
use templ::walker::Entry;
use serde_json::json;
use tempfile::TempDir;

fn name_vars() -> Vars {
    let mut vars = Vars::new();
    vars.insert("Name".to_string(), json!("Ada"));
    vars
}

#[test]
fn test_expand_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("greeting_{{ Name }}.txt");
    fs::write(&path, "Hello {{ Name }}!").unwrap();

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars()).unwrap();

    assert_eq!(result.rendered_path, "greeting_Ada.txt");
    assert_eq!(result.content.as_deref(), Some("Hello Ada!".as_bytes()));
    assert!(!result.entry.is_dir);
    assert_eq!(result.entry.path, path);
}

#[test]
fn test_expand_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("{{ Name }}_dir");
    fs::create_dir(&path).unwrap();

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars()).unwrap();

    assert_eq!(result.rendered_path, "Ada_dir");
    assert!(result.content.is_none());
    assert!(result.entry.is_dir);
}

#[test]
fn test_expand_root() {
    let temp_dir = TempDir::new().unwrap();
    let entry = Entry::from_path(temp_dir.path(), temp_dir.path()).unwrap();

    let result = expand(&MiniJinjaRenderer::new(), entry, &Vars::new()).unwrap();

    assert_eq!(result.rendered_path, "");
    assert!(result.content.is_none());
}

#[test]
fn test_expand_name_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad_{{ Name.txt");
    fs::write(&path, "fine").unwrap();

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars());

    match result {
        Err(ExpandError::NamePattern { path, source }) => {
            assert_eq!(path, "bad_{{ Name.txt");
            assert!(matches!(source, RenderError::Syntax(_)));
        }
        other => panic!("Expected NamePattern error, got {other:?}"),
    }
}

#[test]
fn test_expand_content_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    fs::write(&path, "{% for x in List %}").unwrap();

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars());

    match result {
        Err(ExpandError::ContentPattern { path, .. }) => assert_eq!(path, "file.txt"),
        other => panic!("Expected ContentPattern error, got {other:?}"),
    }
}

#[test]
fn test_expand_keeps_binary_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("image.bin");
    let bytes = vec![0xff, 0xfe, b'{', b'{', 0x00];
    fs::write(&path, &bytes).unwrap();

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars()).unwrap();

    assert_eq!(result.content, Some(bytes));
}

#[test]
fn test_expand_missing_entry() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let result = expand_path(&MiniJinjaRenderer::new(), temp_dir.path(), &path, &name_vars());
    assert!(matches!(result, Err(ExpandError::Read { .. })));
}
