use templ::cli::{Args, Command};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("templ")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_apply_args() {
    let parsed = Args::try_parse_from(make_args(&["apply", "web", "./out"])).unwrap();

    assert!(!parsed.debug);
    assert_eq!(
        parsed.command,
        Command::Apply { name: "web".to_string(), dest: PathBuf::from("./out") }
    );
}

#[test]
fn test_apply_default_dest() {
    let parsed = Args::try_parse_from(make_args(&["apply", "web"])).unwrap();
    assert_eq!(parsed.command, Command::Apply { name: "web".to_string(), dest: PathBuf::from(".") });
}

#[test]
fn test_aliases() {
    for alias in ["generate", "gen"] {
        let parsed = Args::try_parse_from(make_args(&[alias, "web"])).unwrap();
        assert_eq!(parsed.command, Command::Generate { name: "web".to_string() });
    }
    for alias in ["check", "chk", "test"] {
        let parsed = Args::try_parse_from(make_args(&[alias, "web"])).unwrap();
        assert_eq!(parsed.command, Command::Check { name: "web".to_string() });
    }
    let parsed = Args::try_parse_from(make_args(&["ls"])).unwrap();
    assert_eq!(parsed.command, Command::List { verbose: false });
}

#[test]
fn test_list_verbose_and_debug_flags() {
    let parsed = Args::try_parse_from(make_args(&["list", "-v", "--debug"])).unwrap();

    assert!(parsed.debug);
    assert_eq!(parsed.command, Command::List { verbose: true });
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&["apply"])).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["apply", "web", "./out", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
