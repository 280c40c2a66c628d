//! Lispy command-line driver.

use std::io::{self, BufReader};
use std::process::ExitCode;

use lispyc::{init_tracing, DriverError, Input, Options, Session, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(options) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run every input unit; returns the number of units that failed to parse.
fn run(options: Options) -> Result<usize, DriverError> {
    let mut session = Session::new(options.config);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match options.input {
        Input::Expr(expr) => session.run_source("-e", &expr, &mut out, &mut err),
        Input::Stdin => session.run_reader("<stdin>", io::stdin().lock(), &mut out, &mut err),
        Input::Files(paths) => {
            let mut failures = 0;
            for path in paths {
                let file = std::fs::File::open(&path).map_err(|source| DriverError::Read {
                    path: path.clone(),
                    source,
                })?;
                let origin = path.display().to_string();
                failures += session.run_reader(&origin, BufReader::new(file), &mut out, &mut err)?;
            }
            Ok(failures)
        }
    }
}
