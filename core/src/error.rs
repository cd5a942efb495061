use std::path::PathBuf;
use thiserror::Error;

/// A malformed line in a serialized index.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read index {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to write index {path}: {source}")]
    Write { path: PathBuf, #[source] source: std::io::Error },
    #[error("malformed index {path}: {source}")]
    Parse { path: PathBuf, #[source] source: ParseError },
}

/// A query whose tokens cannot be paired into `operand (op operand)*`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedQuery {
    #[error("empty query")]
    Empty,
    #[error("operator `{op}` at position {pos} has no left operand")]
    MissingLeftOperand { op: String, pos: usize },
    #[error("missing operator before `{token}` at position {pos}")]
    MissingOperator { token: String, pos: usize },
    #[error("operator `{op}` at end of query has no right operand")]
    TrailingOperator { op: String },
    #[error("NOT at position {pos} is not followed by a term")]
    DanglingNot { pos: usize },
}
