// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Every way a run can fail fatally. A missing input file is
// not listed here: it is a per-file warning, recorded in the
// RunSummary, and the run carries on.
//
// Releasing the tokenizer model can also fail, but that is
// only ever logged (see application::model_guard).

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot load tokenizer model from '{}': {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("cannot read input file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot tokenize '{}': {reason}", path.display())]
    Tokenize { path: PathBuf, reason: String },

    #[error("cannot write output file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Render an error and all of its sources on one line.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
