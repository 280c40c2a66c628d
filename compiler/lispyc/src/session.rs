//! Evaluation session: one environment shared by every input unit.

use std::io::{BufRead, Write};

use lispy_eval::{read, Environment, EvalConfig, Interpreter, Value};
use lispy_syntax::{parse, AstNode, ParseError};

use crate::DriverError;

/// Long-lived evaluation state for the driver.
///
/// Definitions made by one unit stay visible to later units.
pub struct Session {
    env: Environment,
    config: EvalConfig,
}

impl Session {
    pub fn new(config: EvalConfig) -> Self {
        Session {
            env: Environment::with_builtins(),
            config,
        }
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse, read and evaluate one input unit.
    ///
    /// Returns `None` when the unit holds no expressions (only whitespace or
    /// comments).
    pub fn eval_unit(&mut self, source: &str) -> Result<Option<Value>, ParseError> {
        let tree = parse(source)?;
        // Just the two anchors.
        if tree.children().len() <= 2 {
            return Ok(None);
        }
        let value = read(&tree);
        let mut interp = Interpreter::builder(&mut self.env)
            .config(self.config)
            .build();
        let result = interp.eval(value);
        if let Some(err) = result.as_error() {
            tracing::debug!(kind = ?err.kind, "unit evaluated to an error");
        }
        Ok(Some(result))
    }

    /// Evaluate every non-blank line of `reader`, printing each result to
    /// `out` and each parse failure to `err`.
    ///
    /// Returns the number of lines that failed to parse. I/O failures abort.
    pub fn run_reader<R, W, E>(
        &mut self,
        origin: &str,
        reader: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<usize, DriverError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut failures = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DriverError::Read {
                path: origin.into(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            match self.eval_unit(&line) {
                Ok(Some(value)) => writeln!(out, "{value}").map_err(DriverError::Output)?,
                Ok(None) => {}
                Err(source) => {
                    failures += 1;
                    let offset = source.offset();
                    let error = DriverError::Parse {
                        origin: origin.to_string(),
                        line: index + 1,
                        source,
                    };
                    tracing::debug!(offset, %error, "parse failed");
                    writeln!(err, "error: {error}").map_err(DriverError::Output)?;
                }
            }
        }
        Ok(failures)
    }

    /// [`Session::run_reader`] over an in-memory source.
    pub fn run_source<W, E>(
        &mut self,
        origin: &str,
        source: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<usize, DriverError>
    where
        W: Write,
        E: Write,
    {
        self.run_reader(origin, source.as_bytes(), out, err)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}
