use core::ops::Range;

use lib::prelude::*;
use lib::scan;

/// Characters which mark a number as a part number.
const SYMBOLS: &[u8] = b"#$%&*+-/=@";

#[entry]
fn main(input: IStr, _: &Opts) -> Result<u64> {
    sum_part_numbers(input)
}

fn sum_part_numbers(mut input: IStr) -> Result<u64> {
    let mut window = Window::new();
    let mut sum = 0u64;

    while let Some(line) = input.try_line::<IStr>()? {
        if let Some(rows) = window.push(line) {
            sum = add(sum, part_numbers(rows)?)?;
        }
    }

    if let Some(rows) = window.finish() {
        sum = add(sum, part_numbers(rows)?)?;
    }

    Ok(sum)
}

fn add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).context("sum overflow")
}

/// Sum the part numbers on the current line.
fn part_numbers(rows: Rows<IStr>) -> Result<u64> {
    let line = rows.current.as_data();

    let mut sum = 0u64;
    let mut from = 0;

    while let Some(span) = scan::number_span(line, from) {
        from = span.end;

        let mut digits = rows.current.slice(span.clone()).context("span out of bounds")?;
        let value = digits.next::<u64>()?;

        if let Some(side) = adjacent_symbol(&rows, span) {
            log::debug!("{value}: symbol {side}");
            sum = add(sum, value)?;
        } else {
            log::debug!("{value}: no symbol");
        }
    }

    Ok(sum)
}

fn is_symbol(c: &u8) -> bool {
    SYMBOLS.contains(c)
}

/// Find which side of `span` on the current line, if any, has a symbol.
///
/// Sides are tested in order and the first match wins.
fn adjacent_symbol(rows: &Rows<IStr>, span: Range<usize>) -> Option<&'static str> {
    let line = rows.current.as_data();
    let around = widen(&span);

    if let Some(prev) = &rows.prev {
        if scan::clamped(prev.as_data(), around.clone()).iter().any(is_symbol) {
            return Some("above");
        }
    }

    if let Some(c) = span.start.checked_sub(1).and_then(|n| line.get(n)) {
        if is_symbol(c) {
            return Some("left");
        }
    }

    if let Some(c) = line.get(span.end) {
        if is_symbol(c) {
            return Some("right");
        }
    }

    if let Some(next) = &rows.next {
        if scan::clamped(next.as_data(), around).iter().any(is_symbol) {
            return Some("below");
        }
    }

    None
}

/// The span extended by one character on each side.
fn widen(span: &Range<usize>) -> Range<isize> {
    let start = isize::try_from(span.start).unwrap_or(isize::MAX);
    let end = isize::try_from(span.end).unwrap_or(isize::MAX);
    start.saturating_sub(1)..end.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use lib::env::Size;
    use lib::prelude::*;

    use super::{adjacent_symbol, part_numbers, sum_part_numbers};

    fn input(data: &'static str) -> IStr {
        IStr::new(data.as_bytes(), Size::ZERO)
    }

    fn rows(prev: Option<&'static str>, current: &'static str, next: Option<&'static str>) -> Rows<IStr> {
        Rows {
            prev: prev.map(input),
            current: input(current),
            next: next.map(input),
        }
    }

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_diagonal_below() {
        let rows = rows(None, "467..114..", Some("...*......"));
        assert_eq!(adjacent_symbol(&rows, 0..3), Some("below"));
        assert_eq!(adjacent_symbol(&rows, 5..8), None);
        assert_eq!(part_numbers(rows).unwrap(), 467);
    }

    #[test]
    fn test_three_line_block() {
        assert_eq!(
            sum_part_numbers(input("467..114..\n...*......\n..35..633.\n")).unwrap(),
            467 + 35
        );
    }

    #[test]
    fn test_sides() {
        assert_eq!(adjacent_symbol(&rows(Some(".#."), ".1.", None), 1..2), Some("above"));
        assert_eq!(adjacent_symbol(&rows(None, "*1.", None), 1..2), Some("left"));
        assert_eq!(adjacent_symbol(&rows(None, ".1=", None), 1..2), Some("right"));
        assert_eq!(adjacent_symbol(&rows(None, ".1.", Some("..@")), 1..2), Some("below"));
        assert_eq!(adjacent_symbol(&rows(Some("..."), ".1.", Some("...")), 1..2), None);
    }

    #[test]
    fn test_first_match_wins() {
        let rows = rows(Some("#.."), "$1%", Some("..&"));
        assert_eq!(adjacent_symbol(&rows, 1..2), Some("above"));
        assert_eq!(part_numbers(rows).unwrap(), 1);
    }

    #[test]
    fn test_window_is_one_wider() {
        assert_eq!(adjacent_symbol(&rows(Some("#...."), "..12.", None), 2..4), None);
        assert_eq!(adjacent_symbol(&rows(Some(".#..."), "..12.", None), 2..4), Some("above"));
        assert_eq!(adjacent_symbol(&rows(Some("....#"), "..12.", None), 2..4), Some("above"));
    }

    #[test]
    fn test_edges_are_clamped() {
        assert_eq!(adjacent_symbol(&rows(Some("*"), "12", Some("")), 0..2), Some("above"));
        assert_eq!(adjacent_symbol(&rows(None, "12", Some("..+")), 0..2), Some("below"));
        assert_eq!(adjacent_symbol(&rows(None, "12", None), 0..2), None);
    }

    #[test]
    fn test_only_listed_symbols() {
        assert_eq!(adjacent_symbol(&rows(Some("!?^"), ".1.", None), 1..2), None);
    }

    #[test]
    fn test_example() {
        assert_eq!(sum_part_numbers(input(EXAMPLE)).unwrap(), 4361);
    }

    #[test]
    fn test_blank_and_single_lines() {
        assert_eq!(sum_part_numbers(input("")).unwrap(), 0);
        assert_eq!(sum_part_numbers(input("12*")).unwrap(), 12);
        assert_eq!(sum_part_numbers(input("12.\n\n*..\n")).unwrap(), 0);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let error = sum_part_numbers(input("#99999999999999999999999\n")).unwrap_err();
        let error = error.downcast::<IStrError>().unwrap();
        assert_eq!(error.span(), Size::new(1)..Size::new(24));
    }
}
