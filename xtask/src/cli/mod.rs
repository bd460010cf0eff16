//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Manifests(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "manifests" => Ok(TopLevelCommand::Manifests(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!("unknown xtask command: {other}"))
            .with_hint("run `cargo xtask help` for the command list")),
    }
}

/// Print the top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           manifests [--root <dir>]  Regenerate manifest.json files under the image root\n\
                                     (default: crates/site/public/images)\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_arguments_print_help() {
        assert_eq!(parse(Vec::new()), Ok(TopLevelCommand::Help));
    }

    #[test]
    fn manifests_keeps_remaining_arguments() {
        assert_eq!(
            parse(args(&["manifests", "--root", "tmp/images"])),
            Ok(TopLevelCommand::Manifests(args(&["--root", "tmp/images"])))
        );
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(args(&["deploy"])).unwrap_err();
        assert_eq!(err.category, crate::runtime::error::XtaskErrorCategory::Validation);
        assert!(err.to_string().contains("unknown xtask command: deploy"));
    }
}
