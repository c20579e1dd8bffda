//! Helpers for scanning lines of bytes.

use core::ops::Range;

/// Find the span of the next run of decimal digits in `line`, starting at or
/// after `from`.
///
/// The returned span is absolute in `line` and maximal, so the bytes directly
/// before and after it are not digits.
///
/// # Examples
///
/// ```
/// use lib::scan::number_span;
///
/// assert_eq!(number_span(b"....123...", 0), Some(4..7));
/// assert_eq!(number_span(b"...661...485..", 6), Some(9..12));
/// assert_eq!(number_span(b".....", 0), None);
/// ```
pub fn number_span(line: &[u8], from: usize) -> Option<Range<usize>> {
    let start = from + line.get(from..)?.iter().position(u8::is_ascii_digit)?;

    let mut end = start;

    while let Some(c) = line.get(end) {
        if !c.is_ascii_digit() {
            break;
        }

        end += 1;
    }

    Some(start..end)
}

/// Get the part of `line` covered by `range`, where the range is allowed to
/// extend outside of the line in either direction.
///
/// # Examples
///
/// ```
/// use lib::scan::clamped;
///
/// assert_eq!(clamped(b"abc", -1..5), b"abc");
/// assert_eq!(clamped(b"abcdef", 2..4), b"cd");
/// assert_eq!(clamped(b"abc", 4..8), b"");
/// ```
pub fn clamped(line: &[u8], range: Range<isize>) -> &[u8] {
    let len = line.len();
    let end = usize::try_from(range.end).unwrap_or_default().min(len);
    let start = usize::try_from(range.start).unwrap_or_default().min(end);
    line.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{clamped, number_span};

    #[test]
    fn test_number_span() {
        assert_eq!(number_span(b"....123..", 0), Some(4..7));
        assert_eq!(number_span(b"....1....", 0), Some(4..5));
        assert_eq!(number_span(b".....45.", 0), Some(5..7));
        assert_eq!(number_span(b"...661...485..", 6), Some(9..12));
    }

    #[test]
    fn test_number_span_empty() {
        assert_eq!(number_span(b"", 0), None);
        assert_eq!(number_span(b"..#..", 0), None);
    }

    #[test]
    fn test_number_span_end_of_line() {
        assert_eq!(number_span(b".....45", 0), Some(5..7));
        assert_eq!(number_span(b"9", 0), Some(0..1));
    }

    #[test]
    fn test_number_span_past_end() {
        assert_eq!(number_span(b"12", 2), None);
        assert_eq!(number_span(b"12", 10), None);
    }

    #[test]
    fn test_number_span_from_inside_number() {
        assert_eq!(number_span(b"..1234", 3), Some(3..6));
    }

    #[test]
    fn test_number_spans_are_maximal() {
        let line = b"1.22..333#4444*";
        let mut from = 0;
        let mut spans = Vec::new();

        while let Some(span) = number_span(line, from) {
            assert!(line[span.clone()].iter().all(u8::is_ascii_digit));
            assert!(span.start == 0 || !line[span.start - 1].is_ascii_digit());
            assert!(line.get(span.end).map_or(true, |c| !c.is_ascii_digit()));
            from = span.end;
            spans.push(span);
        }

        assert_eq!(spans, [0..1, 2..4, 6..9, 10..14]);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(clamped(b"abc", -1..5), b"abc");
        assert_eq!(clamped(b"abc", -3..-1), b"");
        assert_eq!(clamped(b"abc", 2..1), b"");
        assert_eq!(clamped(b"", -1..2), b"");
        assert_eq!(clamped(b"..*..", 1..4), b".*.");
    }
}
