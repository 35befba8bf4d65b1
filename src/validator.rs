//! Dry-run checking of templates for unresolved variables.

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::constants::{CHECK_DEST_PATH, DEST_PATH_VAR, NO_VALUE};
use crate::error::Result;
use crate::expander::expand;
use crate::renderer::TemplateRenderer;
use crate::vars::Vars;
use crate::walker::walk;

/// A problem found while checking a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Template entry the problem was found in
    pub file_name: PathBuf,
    pub message: String,
}

impl Diagnostic {
    fn new(file_name: &Path, message: String) -> Self {
        Self { file_name: file_name.to_path_buf(), message }
    }
}

/// 1-based line of the first unresolved variable in `content`, if any.
pub fn find_no_value_line(content: &str) -> Option<usize> {
    content.find(NO_VALUE).map(|pos| content[..pos].matches('\n').count() + 1)
}

/// Expands every entry of the template without writing anything and
/// reports entries that failed to render or still contain `<no value>`.
///
/// `DEST_PATH` is set to `.` for the duration of the check. Diagnostics are
/// returned in walk order; only a failing walk stops the check early.
pub fn validate<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    template_root: P,
    vars: &mut Vars,
) -> Result<Vec<Diagnostic>> {
    let template_root = template_root.as_ref();
    vars.insert(DEST_PATH_VAR.to_string(), Value::String(CHECK_DEST_PATH.to_string()));

    let vars: &Vars = vars;
    let mut diagnostics = Vec::new();
    walk(template_root, |entry| -> Result<()> {
        let file_name = entry.path.clone();
        debug!("Checking {}", file_name.display());

        let result = match expand(renderer, entry, vars) {
            Ok(result) => result,
            Err(err) => {
                diagnostics.push(Diagnostic::new(&file_name, format!("error {err}")));
                return Ok(());
            }
        };

        if result.rendered_path.contains(NO_VALUE) {
            diagnostics.push(Diagnostic::new(
                &file_name,
                format!("name contains {NO_VALUE}  => {}", result.rendered_path),
            ));
        }

        if let Some(content) = &result.content {
            let content = String::from_utf8_lossy(content);
            if let Some(line) = find_no_value_line(&content) {
                diagnostics.push(Diagnostic::new(
                    &file_name,
                    format!("contains {NO_VALUE} at line {line}"),
                ));
            }
        }
        Ok(())
    })?;

    Ok(diagnostics)
}

/// Formats diagnostics the way `templ check` prints them: `OK` when there
/// are none, otherwise one block per file with its paths relative to
/// `template_root`.
pub fn report<P: AsRef<Path>>(template_root: P, diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "OK\n".to_string();
    }

    let template_root = template_root.as_ref();
    let mut out = String::new();
    let mut current: Option<&Path> = None;
    for diagnostic in diagnostics {
        if current != Some(diagnostic.file_name.as_path()) {
            current = Some(diagnostic.file_name.as_path());
            let name = diagnostic.file_name.strip_prefix(template_root).unwrap_or(&diagnostic.file_name);
            out.push_str(&format!("\n{}\n", name.display()));
        }
        out.push_str(&format!("  - {}\n", diagnostic.message));
    }
    out
}
