//! Command-line interface implementation for templ.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for templ.
#[derive(Parser, Debug)]
#[command(
    name = "templ",
    version,
    about = "templ: file templater",
    long_about = None,
    after_help = "set env $TEMPL_HOME as a template repository (storage).\n\
                  then, templ gen {your template name here}\n\
                  then, cd to where to apply the template\n\
                  then, templ apply {the template name}"
)]
pub struct Args {
    /// Enable debug logging output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of templ.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a sample template
    #[command(visible_alias = "gen")]
    Generate {
        /// Name of the template to create
        #[arg(value_name = "TEMPL_NAME")]
        name: String,
    },

    /// Check a template's validity
    #[command(visible_aliases = ["chk", "test"])]
    Check {
        /// Name of the template to check
        #[arg(value_name = "TEMPL_NAME")]
        name: String,
    },

    /// Apply a template
    Apply {
        /// Name of the template to apply
        #[arg(value_name = "TEMPL_NAME")]
        name: String,

        /// Directory the template is applied to
        #[arg(value_name = "DEST_DIR", default_value = ".")]
        dest: PathBuf,
    },

    /// List templates
    #[command(visible_alias = "ls")]
    List {
        /// Also show the variables of each template
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
