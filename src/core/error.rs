//! Centralised error types used across the crate.

use std::{io, path::PathBuf, str::Utf8Error};

use thiserror::Error;

/// Contract violations raised by the statistics pipeline.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Input handed to the sanitizer or tokenizer was not text.
    #[error("{message}: {source}")]
    InvalidArgument {
        message: &'static str,
        #[source]
        source: Utf8Error,
    },
    /// A map handed to a renderer is not a usable statistics map.
    #[error("{0}")]
    InvalidMap(&'static str),
}

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision {got} is out of range (at most {max} decimals)")]
    PrecisionOutOfRange { got: usize, max: usize },
    #[error("bar glyph {0:?} must be a visible character")]
    InvalidGlyph(char),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum TextalyzeError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TextalyzeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
