//! Interactive resolution of prompted variables.

use dialoguer::Input;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::vars::{coerce_answer, is_prompted, type_name, Vars};

/// Source of answers for prompted variables.
pub trait Prompter {
    /// Asks for a new value of `key`, whose current value is `current`.
    fn ask(&self, key: &str, current: &Value) -> Result<String>;
}

/// Prompter reading answers from the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, key: &str, current: &Value) -> Result<String> {
        Input::<String>::new()
            .with_prompt(format!("{key} ({})", type_name(current)))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Asks for every prompted variable, in definition order, and stores the
/// answers converted to the type of the value they replace.
pub fn resolve_prompted(prompter: &dyn Prompter, vars: &mut Vars) -> Result<()> {
    for (key, value) in vars.iter_mut() {
        if !is_prompted(key) {
            continue;
        }
        let answer = prompter.ask(key, value)?;
        *value = coerce_answer(key, value, &answer)?;
    }
    Ok(())
}
