//! templ's main application entry point.
//! Handles command-line argument parsing and dispatches each subcommand
//! to the template store and the expansion engine.

use std::path::{Path, PathBuf};

use templ::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Error, Result},
    home::{list_templates, resolve_home},
    logger::init_logger,
    prompt::{resolve_prompted, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    template::Template,
    validator::report,
    vars::type_name,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.debug);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let home = resolve_home(|key| std::env::var(key).ok()).ok_or(Error::HomeNotSetError)?;
    std::fs::create_dir_all(&home)?;

    match args.command {
        Command::Generate { name } => generate(&home, &name),
        Command::Check { name } => check(&home, &name),
        Command::Apply { name, dest } => apply(&home, &name, &dest),
        Command::List { verbose } => list(&home, verbose),
    }
}

fn existing_template(home: &Path, name: &str) -> Result<Template> {
    let path = home.join(name);
    if !path.is_dir() {
        return Err(Error::TemplateDoesNotExistError { path });
    }
    Template::load(path)
}

fn generate(home: &Path, name: &str) -> Result<()> {
    let path = home.join(name);
    println!("generate `{}`...", path.display());
    Template::scaffold(path)?;
    Ok(())
}

fn check(home: &Path, name: &str) -> Result<()> {
    let mut template = existing_template(home, name)?;
    println!("check `{}`...", template.path.display());

    let diagnostics = template.check(&MiniJinjaRenderer::new())?;
    print!("{}", report(&template.path, &diagnostics));
    Ok(())
}

fn apply(home: &Path, name: &str, dest: &Path) -> Result<()> {
    let mut template = existing_template(home, name)?;
    println!("apply `{}`...", template.path.display());

    let dest: PathBuf = if dest.is_absolute() {
        dest.to_path_buf()
    } else {
        std::env::current_dir()?.join(dest)
    };
    std::fs::create_dir_all(&dest)?;

    println!();
    resolve_prompted(&DialoguerPrompter::new(), &mut template.def.vars)?;
    println!();

    template.apply_to(&MiniJinjaRenderer::new(), &dest, |path| println!("  {path}"))
}

fn list(home: &Path, verbose: bool) -> Result<()> {
    for path in list_templates(home)? {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        println!("* {name}");

        let template = match Template::load(&path) {
            Ok(template) => template,
            Err(err) => {
                println!("  failed to load definitions: {err}");
                continue;
            }
        };

        if !template.def.description.is_empty() {
            println!("  [Description]");
            println!("  {}", template.def.description);
        }

        if verbose && !template.def.vars.is_empty() {
            println!("  [Variables]");
            for (key, value) in &template.def.vars {
                println!("  - {key}:\t{}", type_name(value));
            }
        }
    }
    Ok(())
}
