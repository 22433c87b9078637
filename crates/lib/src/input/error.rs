use core::ops::Range;

use thiserror::Error;

/// The kinds of errors raised while processing input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("bad array; expected {0}, but got {1}")]
    BadArray(usize, usize),
    #[error("array out of capacity ({0})")]
    ArrayCapacity(usize),
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
}

/// Error raised through input processing.
#[derive(Debug, Error)]
#[error("{kind} (at bytes {span:?})")]
pub struct IStrError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte range in the original input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(self) -> ErrorKind {
        self.kind
    }
}
