//! Command-line options.

use std::path::PathBuf;

use lispy_eval::EvalConfig;

use crate::DriverError;

pub const USAGE: &str = "\
Usage: lispy [options] [FILE...]

Evaluates each non-blank line as one expression and prints its result.
Reads standard input when no FILE or -e is given.

Options:
  -e <expr>           Evaluate <expr> instead of reading files
  --max-depth=<n>     Maximum evaluation depth (default: 10000)
  -h, --help          Show this message";

/// Where input units come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// One expression given on the command line.
    Expr(String),
    Files(Vec<PathBuf>),
    Stdin,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub config: EvalConfig,
    pub input: Input,
    pub help: bool,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Options, DriverError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = EvalConfig::default();
        let mut expr = None;
        let mut files = Vec::new();
        let mut help = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                help = true;
            } else if arg == "-e" {
                let value = args
                    .next()
                    .ok_or_else(|| DriverError::MissingValue(arg.clone()))?;
                expr = Some(value);
            } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                config.max_depth = value.parse().map_err(|_| DriverError::InvalidValue {
                    option: "--max-depth".to_string(),
                    value: value.to_string(),
                })?;
            } else if arg.starts_with('-') {
                return Err(DriverError::UnknownOption(arg));
            } else {
                files.push(PathBuf::from(arg));
            }
        }

        let input = match (expr, files.is_empty()) {
            (Some(_), false) => return Err(DriverError::ConflictingInputs),
            (Some(expr), true) => Input::Expr(expr),
            (None, false) => Input::Files(files),
            (None, true) => Input::Stdin,
        };

        Ok(Options {
            config,
            input,
            help,
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Options, DriverError> {
        Options::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults_to_stdin() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.input, Input::Stdin);
        assert_eq!(options.config, EvalConfig::default());
        assert!(!options.help);
    }

    #[test]
    fn expression_and_depth() {
        let options = parse(&["--max-depth=64", "-e", "+ 1 2"]).unwrap();
        assert_eq!(options.input, Input::Expr("+ 1 2".to_string()));
        assert_eq!(options.config.max_depth, 64);
    }

    #[test]
    fn files_in_order() {
        let options = parse(&["a.lspy", "b.lspy"]).unwrap();
        assert_eq!(
            options.input,
            Input::Files(vec![PathBuf::from("a.lspy"), PathBuf::from("b.lspy")])
        );
    }

    #[test]
    fn help_flag() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&["--verbose"]),
            Err(DriverError::UnknownOption(opt)) if opt == "--verbose"
        ));
        assert!(matches!(parse(&["-e"]), Err(DriverError::MissingValue(_))));
        assert!(matches!(
            parse(&["--max-depth=lots"]),
            Err(DriverError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse(&["-e", "1", "file.lspy"]),
            Err(DriverError::ConflictingInputs)
        ));
    }
}
