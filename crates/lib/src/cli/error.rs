use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate a position in the input with an error.
///
/// Errors which don't refer to the input, like bad arguments, are returned
/// as-is.
pub fn error_context(path: &'static str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let Some(span) = find_range(&error) else {
        return error;
    };

    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let start = self.start + 1;

        if self.end > self.start + 1 {
            write!(f, "{line}:{start}-{}", self.end)
        } else {
            write!(f, "{line}:{start}")
        }
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<Size>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
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
    use anyhow::Context;

    use super::{error_context, LineCol};
    use crate::env::Size;
    use crate::input::{ErrorKind, IStr};

    #[test]
    fn test_display() {
        assert_eq!(LineCol::new(0, 0, 0).to_string(), "1:1");
        assert_eq!(LineCol::new(2, 4, 5).to_string(), "3:5");
        assert_eq!(LineCol::new(2, 4, 7).to_string(), "3:5-7");
    }

    #[test]
    fn test_error_context() {
        let data = IStr::new(b"1abc\n2\nxyz\n", Size::ZERO);
        let line = data.slice(7..10).unwrap();

        let error = anyhow::Error::from(line.error(ErrorKind::ExpectedDigit));
        let error = error_context("<stdin>", data, error);
        assert_eq!(format!("{error:#}"), "<stdin>:3:1-3: expected a digit");
    }

    #[test]
    fn test_error_context_through_context() {
        let data = IStr::new(b"12\nab\n", Size::ZERO);
        let line = data.slice(3..5).unwrap();

        let error = Err::<(), _>(line.error(ErrorKind::ExpectedDigit))
            .context("bad calibration")
            .unwrap_err();

        let error = error_context("<stdin>", data, error);
        assert_eq!(
            format!("{error:#}"),
            "<stdin>:2:1-2: bad calibration: expected a digit"
        );
    }

    #[test]
    fn test_error_context_without_span() {
        let data = IStr::new(b"12\n", Size::ZERO);
        let error = error_context("<stdin>", data, anyhow::anyhow!("bad argument"));
        assert_eq!(format!("{error:#}"), "bad argument");
    }
}
