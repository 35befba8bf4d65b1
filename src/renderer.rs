//! Template renderer used for both entry names and entry contents.
//! Wraps MiniJinja and makes undefined variables visible in the output
//! instead of silently rendering them as empty strings.
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use minijinja::{Environment, ErrorKind, Output, State, UndefinedBehavior, Value};

use crate::constants::{DEFAULT_TIME_FORMAT, NO_VALUE};
use crate::error::RenderError;
use crate::vars::Vars;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `vars` - Variables available to the template
    ///
    /// # Returns
    /// * `Result<String, RenderError>` - Rendered template string
    fn render(&self, template: &str, vars: &Vars) -> Result<String, RenderError>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the `time` helper and the `<no value>` formatter.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_formatter(no_value_formatter);
        env.add_function("time", time);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `RenderError::Syntax` if the template cannot be parsed
    /// * `RenderError::Evaluation` if rendering the parsed template fails
    fn render(&self, template: &str, vars: &Vars) -> Result<String, RenderError> {
        self.env.render_str(template, vars).map_err(RenderError::from)
    }
}

/// Prints undefined and `none` values as [`NO_VALUE`] and defers everything
/// else to MiniJinja's default formatter.
fn no_value_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if value.is_undefined() || value.is_none() {
        return out
            .write_str(NO_VALUE)
            .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "formatting failed"));
    }
    minijinja::escape_formatter(out, state, value)
}

/// `time(format)`: the current local time formatted with a strftime pattern.
fn time(format: Option<String>) -> Result<String, minijinja::Error> {
    let format = format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT);
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid time format {format:?}"),
        ));
    }

    let mut formatted = String::new();
    write!(formatted, "{}", chrono::Local::now().format_with_items(items.into_iter()))
        .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "formatting failed"))?;
    Ok(formatted)
}
