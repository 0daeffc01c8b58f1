//! Systemic generator failures.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation round.
///
/// Per-declaration problems (a marker on a non-struct item, malformed marker
/// arguments) are never reported here - they become
/// [`Diagnostic`](crate::Diagnostic)s and the round continues. Only systemic
/// failures - unreadable or unparsable input, a failed persist - surface as
/// `CodegenError`.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{path}` as Rust source")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("failed to parse source string as Rust source")]
    ParseSource(#[source] syn::Error),

    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
