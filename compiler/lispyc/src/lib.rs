//! Lispy driver library: option parsing, the evaluation session that feeds
//! input units through parse, read and eval, and tracing setup.

mod options;
mod session;

use std::io;
use std::path::PathBuf;
use std::sync::Once;

use lispy_syntax::ParseError;

pub use options::{Input, Options, USAGE};
pub use session::Session;

/// Driver-level failure. Evaluation errors are values and never end up here.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("invalid value '{value}' for '{option}'")]
    InvalidValue { option: String, value: String },
    #[error("-e cannot be combined with input files")]
    ConflictingInputs,
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("{origin}:{line}: {source}")]
    Parse {
        origin: String,
        line: usize,
        #[source]
        source: ParseError,
    },
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// Logs go to stderr. `LISPY_LOG_TREE=1` renders spans as an indented tree
/// instead of flat lines. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("LISPY_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
