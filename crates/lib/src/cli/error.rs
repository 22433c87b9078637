use core::fmt;
use core::ops::Range;

use crate::input::{IStr, IStrError, NL};

/// Associate path and position context with an error escaping a solver.
pub(crate) fn error_context(path: &'static str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let span = find_span(&error);
    let pos = pos_from(data.as_data(), span.start);
    error.context(ErrorContext { path, pos })
}

/// Need to be able to unwrap an error fully in case it's threaded
/// through multiple layers of processing.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<IStrError>() {
        Some(e) => e.span(),
        None => 0..0,
    }
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.start)
    }
}

/// Translate a byte offset into the input to a line and column.
fn pos_from(data: &[u8], at: usize) -> LineCol {
    let at = at.min(data.len());
    let line = memchr::memchr_iter(NL, &data[..at]).count();

    let start = match memchr::memrchr(NL, &data[..at]) {
        Some(n) => at - n - 1,
        None => at,
    };

    LineCol::new(line, start)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::{pos_from, LineCol};

    #[test]
    fn test_pos_from() {
        let data = b"1 2\n3 x\n";
        assert_eq!(pos_from(data, 0), LineCol::new(0, 0));
        assert_eq!(pos_from(data, 2), LineCol::new(0, 2));
        assert_eq!(pos_from(data, 6), LineCol::new(1, 2));
        assert_eq!(pos_from(data, 64), LineCol::new(2, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineCol::new(1, 2).to_string(), "2:2");
    }
}
