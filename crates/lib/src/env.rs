//! Where input comes from, and how offsets into it map back to positions.

use core::ops::Range;
use std::io::Read;

use anyhow::{Context, Result};

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// Path used when reporting positions in standard input.
pub const STDIN: &str = "<stdin>";

/// An absolute byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let Some(before) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();
    let line_start = memchr::memrchr(NL, before).map_or(0, |n| n + 1);
    let start = span.start.saturating_sub(line_start);

    let len = match data.get(span) {
        Some(d) => memchr::memchr(NL, d).unwrap_or(d.len()),
        None => 0,
    };

    LineCol::new(line, start, start.saturating_add(len))
}

/// Read all of standard input.
///
/// The buffer is leaked since it has to live until the process exits
/// *anyway*, and it's much easier to hand out `'static` slices of it than to
/// deal with lifetimes in every solution.
pub fn stdin() -> Result<IStr> {
    let mut buf = Vec::with_capacity(4096);

    std::io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context(STDIN)?;

    log::debug!("read {} bytes from {STDIN}", buf.len());
    Ok(IStr::new(Vec::leak(buf), Size::ZERO))
}

#[cfg(test)]
mod tests {
    use super::{pos_from, Size};
    use crate::cli::LineCol;

    fn span(start: usize, end: usize) -> core::ops::Range<Size> {
        Size::new(start)..Size::new(end)
    }

    #[test]
    fn test_pos_first_line() {
        assert_eq!(pos_from(b"abc\ndef", span(1, 2)), LineCol::new(0, 1, 2));
    }

    #[test]
    fn test_pos_later_line() {
        let data = b"ab\ncd\nef";
        assert_eq!(pos_from(data, span(4, 5)), LineCol::new(1, 1, 2));
        assert_eq!(pos_from(data, span(6, 8)), LineCol::new(2, 0, 2));
    }

    #[test]
    fn test_pos_span_stops_at_newline() {
        assert_eq!(pos_from(b"ab\ncd\nef", span(1, 7)), LineCol::new(0, 1, 2));
    }

    #[test]
    fn test_pos_out_of_bounds() {
        assert_eq!(pos_from(b"ab", span(10, 12)), LineCol::EMPTY);
    }
}
