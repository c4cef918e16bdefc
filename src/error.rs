use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogStreamError {
    #[error("failed to open debug capture {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line_number} of debug capture: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed logStreams payload in {line}: {source}")]
    MalformedPayload {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("payload has no logStreams array: {line}")]
    MissingStreams { line: String },

    #[error("invalid log stream entry #{index} in {line}: {source}")]
    InvalidRecord {
        index: usize,
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("arn '{arn}' does not name a log group and log stream")]
    UnrecognizedArn { arn: String },
}

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("letter ranking must not be empty")]
    EmptyRanking,

    #[error("practice length {length} must be between {min} and {max}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
}

impl LogStreamError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

impl PracticeError {
    pub fn word_list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WordList {
            path: path.into(),
            source,
        }
    }
}
