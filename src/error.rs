//! Error handling for the templ application.
//! Defines the error types raised by each stage of template expansion
//! and the crate-wide error used by the command-line front-end.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a single pattern.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pattern could not be parsed.
    #[error("{0}")]
    Syntax(#[source] minijinja::Error),

    /// The pattern parsed but evaluating it failed.
    #[error("{0}")]
    Evaluation(#[source] minijinja::Error),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => RenderError::Syntax(err),
            _ => RenderError::Evaluation(err),
        }
    }
}

/// Errors raised while expanding one template entry.
#[derive(Error, Debug)]
pub enum ExpandError {
    /// The entry's relative path failed to render.
    #[error("parse name `{path}`: {source}")]
    NamePattern {
        path: String,
        #[source]
        source: RenderError,
    },

    /// The entry's content failed to render.
    #[error("parse content `{path}`: {source}")]
    ContentPattern {
        path: String,
        #[source]
        source: RenderError,
    },

    /// The entry's content could not be read.
    #[error("read content `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while materializing a template into a destination.
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("template path does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("dest path does not exist: {}", .0.display())]
    DestMissing(PathBuf),

    #[error("apply template: {0}")]
    Expansion(#[from] ExpandError),

    #[error("apply template: write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("apply template: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("apply template: {0}")]
    Stat(#[from] io::Error),
}

/// Crate-wide error type used by the front-end and the template store.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while walking a template tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents errors that occur while applying a template
    #[error("{0}.")]
    ApplyError(#[from] ApplyError),

    /// Represents an unreadable or unwritable template definition
    #[error("Definition error in '{}': {source}.", .path.display())]
    DefinitionError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Neither TEMPL_HOME nor HOME is set
    #[error("set env TEMPL_HOME first.")]
    HomeNotSetError,

    /// The requested template is not present in the template storage
    #[error("Template does not exist: '{}'.", .path.display())]
    TemplateDoesNotExistError { path: PathBuf },

    /// Represents failures of the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A prompted number could not be parsed
    #[error("re-defining var {key:?} to {value}: invalid number")]
    InvalidAnswerError { key: String, value: String },
}

/// Convenience type alias for Results with the crate error as default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
