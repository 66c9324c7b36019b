//! Driver-level failures: bad usage, unreadable input, broken output.

use std::io;

use tabula_parse::GrammarError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("internal grammar error: {0}")]
    Grammar(#[from] GrammarError),
}

impl DriverError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
