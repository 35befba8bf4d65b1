//! Common constants used throughout the templ application.

/// Name of the per-template definition file. Never rendered or copied.
pub const DEFINITION_FILE: &str = "template.json";

/// Variable injected before rendering, holding the destination root.
pub const DEST_PATH_VAR: &str = "DEST_PATH";

/// Destination value injected while checking a template.
pub const CHECK_DEST_PATH: &str = ".";

/// Text printed in place of a variable that has no value.
pub const NO_VALUE: &str = "<no value>";

/// Variables starting with this prefix are asked for before applying.
pub const PROMPT_PREFIX: char = '_';

/// Environment variable pointing at the template storage.
pub const HOME_ENV: &str = "TEMPL_HOME";

/// Storage directory used under `$HOME` when `TEMPL_HOME` is unset.
pub const HOME_DIR: &str = ".templ";

/// Default strftime pattern of the `time` helper.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
