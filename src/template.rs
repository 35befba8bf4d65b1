//! Templates stored on disk together with their `template.json` definition.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::DEFINITION_FILE;
use crate::error::{Error, Result};
use crate::processor::apply;
use crate::renderer::TemplateRenderer;
use crate::validator::{validate, Diagnostic};
use crate::vars::Vars;

/// Content of a template's definition file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDefinition {
    #[serde(rename = "desc")]
    pub description: String,
    pub author: String,
    pub vars: Vars,
}

/// A template directory and its definition.
#[derive(Debug, Clone)]
pub struct Template {
    pub path: PathBuf,
    pub def: TemplateDefinition,
}

const SAMPLE_DIR: &str = "this_is_based_on";
const SAMPLE_FILE: &str = "file_{{ SampleStr }}_{{ SampleNum }}.txt";
const SAMPLE_CONTENT: &str = r#"SampleList:
{% for item in SampleList %}  - {{ item }}
{% endfor %}
Map:
{% for key, value in SampleMap|items %}  {{ key }} : {{ value }}
{% endfor %}
Prompted:
  - _SampleStrPrompted : {{ _SampleStrPrompted }}
  - _SampleNumPrompted : {{ _SampleNumPrompted }}
"#;

impl Template {
    /// Creates a template with an empty definition.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), def: TemplateDefinition::default() }
    }

    /// Location of the definition file.
    pub fn def_path(&self) -> PathBuf {
        self.path.join(DEFINITION_FILE)
    }

    /// Loads the template at `path`. A missing definition file yields an
    /// empty definition.
    ///
    /// # Errors
    /// * `Error::IoError` if the definition file cannot be read
    /// * `Error::DefinitionError` if it is not a valid definition
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let mut template = Self::new(path);
        let def_path = template.def_path();
        if !def_path.is_file() {
            debug!("No definition file in {}", template.path.display());
            return Ok(template);
        }

        debug!("Loading definition from {}", def_path.display());
        let content = fs::read_to_string(&def_path)?;
        template.def = serde_json::from_str(&content)
            .map_err(|source| Error::DefinitionError { path: def_path, source })?;
        Ok(template)
    }

    /// Writes the definition, creating the template directory if needed.
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.path)?;

        let def_path = self.def_path();
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.def
            .serialize(&mut serializer)
            .map_err(|source| Error::DefinitionError { path: def_path.clone(), source })?;

        fs::write(def_path, buf)?;
        Ok(())
    }

    /// Creates a sample template at `path` showing variables, lists, maps
    /// and prompted variables.
    pub fn scaffold<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let mut template = Self::new(path);
        template.def.author = "author".to_string();
        template.def.description = "description of this template.".to_string();

        let vars = &mut template.def.vars;
        vars.insert("_SampleStrPrompted".to_string(), json!(""));
        vars.insert("_SampleNumPrompted".to_string(), json!(0));
        vars.insert("SampleStr".to_string(), json!("value1"));
        vars.insert("SampleNum".to_string(), json!(100));
        vars.insert("SampleList".to_string(), json!(["a", "b", 100]));
        vars.insert("SampleMap".to_string(), json!({"key1": "a", "key2": 100}));

        template.save()?;

        let sample_dir = template.path.join(SAMPLE_DIR);
        fs::create_dir_all(&sample_dir)?;
        fs::write(sample_dir.join(SAMPLE_FILE), SAMPLE_CONTENT)?;

        Ok(template)
    }

    /// Applies this template to `dest`, reporting each written path.
    pub fn apply_to<P: AsRef<Path>, F: FnMut(&str)>(
        &mut self,
        renderer: &dyn TemplateRenderer,
        dest: P,
        progress: F,
    ) -> Result<()> {
        apply(renderer, &self.path, dest, &mut self.def.vars, progress)?;
        Ok(())
    }

    /// Checks this template for rendering problems without writing anything.
    pub fn check(&mut self, renderer: &dyn TemplateRenderer) -> Result<Vec<Diagnostic>> {
        validate(renderer, &self.path, &mut self.def.vars)
    }
}
