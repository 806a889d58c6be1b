use miette::Diagnostic;
use thiserror::Error;

/// A position or range that falls outside a queue.
///
/// These describe programmer errors. The panicking operations (`Index`,
/// `set`, `replace_range`, ...) panic with this error's message, and the
/// `try_` operations hand it back instead.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq, Clone)]
pub enum QueueError {
    #[error("Index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Range starts at {start} but ends at {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("Range end {end} out of bounds for queue of length {len}")]
    RangeOutOfBounds { end: usize, len: usize },
}
