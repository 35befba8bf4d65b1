//! templ instantiates directory-tree templates into concrete file trees by
//! rendering variables into both path names and file contents.

/// Command-line interface module for the templ application
pub mod cli;

/// Common constants: reserved names and markers
pub mod constants;

/// Error types and handling for the templ application
pub mod error;

/// Rendering of a single template entry
pub mod expander;

/// Template storage location and listing
pub mod home;

/// Logger initialization
pub mod logger;

/// Writing a rendered template into a destination directory
pub mod processor;

/// Interactive resolution of prompted variables
pub mod prompt;

/// MiniJinja-based pattern rendering
pub mod renderer;

/// Templates and their `template.json` definition
pub mod template;

/// Checking templates for unresolved variables
pub mod validator;

/// Variable sets and prompted-variable conventions
pub mod vars;

/// Pre-order traversal of template trees
pub mod walker;
