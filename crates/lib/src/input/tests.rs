use crate::env::Size;
use crate::input::{ErrorKind, IStr, Split, W};

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

#[test]
fn test_lines() {
    let mut input = input("first\n\nthird\n");

    let first = input.try_line::<&str>().unwrap();
    let second = input.try_line::<&str>().unwrap();
    let third = input.try_line::<IStr>().unwrap().unwrap();

    assert_eq!(first, Some("first"));
    assert_eq!(second, Some(""));
    assert_eq!(third.as_data(), b"third");
    assert_eq!(third.index(), Size::new(7));
    assert!(input.try_line::<IStr>().unwrap().is_none());
}

#[test]
fn test_last_line_without_newline() {
    let mut input = input("a\nb");
    assert_eq!(input.try_line::<&str>().unwrap(), Some("a"));
    assert_eq!(input.try_line::<&str>().unwrap(), Some("b"));
    assert_eq!(input.try_line::<&str>().unwrap(), None);
}

#[test]
fn test_expected_line() {
    let mut input = input("");
    let error = input.line::<IStr>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_words_and_integers() {
    let mut input = input("  Game 42 ");
    let (W(word), id) = input.next::<(W<&str>, u32)>().unwrap();
    assert_eq!(word, "Game");
    assert_eq!(id, 42);
    assert!(input.try_next::<W>().unwrap().is_none());
}

#[test]
fn test_bad_integer_span() {
    let mut input = input("12 blue");
    let error = input.next::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("blue")));
    assert_eq!(error.span(), Size::new(3)..Size::new(7));
}

#[test]
fn test_split() {
    let mut input = input("Game 1: 3 blue");
    let Split([header, rest]) = input.next::<Split<':', [IStr; 2]>>().unwrap();
    assert_eq!(header.as_data(), b"Game 1");
    assert_eq!(rest.as_data(), b" 3 blue");
    assert_eq!(rest.index(), Size::new(7));
}

#[test]
fn test_split_missing_delimiter() {
    let mut input = input("Game 1");
    let error = input.next::<Split<':', [IStr; 2]>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedEof));
}

#[test]
fn test_split_pieces() {
    let mut input = input("a;;b;");
    let pieces = input.split(b';').map(|p| p.as_data()).collect::<Vec<_>>();
    assert_eq!(pieces, [&b"a"[..], b"", b"b"]);
}

#[test]
fn test_slice_and_error() {
    let input = input("ab\ncd");
    let slice = input.slice(3..5).unwrap();
    assert_eq!(slice.as_data(), b"cd");
    assert!(input.slice(3..9).is_none());

    let error = slice.error(ErrorKind::ExpectedDigit);
    assert_eq!(error.span(), Size::new(3)..Size::new(5));
}

#[test]
fn test_split_extra_pieces() {
    let mut input = input("Game 1: 3 blue: 99 red");
    let error = input.next::<Split<':', [IStr; 2]>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::BadArray(2, 3)));
    assert_eq!(error.span(), Size::new(0)..Size::new(22));
}

#[test]
fn test_end() {
    let mut input = input("3 blue \r");
    input.next::<(u32, W<&str>)>().unwrap();
    assert!(input.end().is_ok());

    let mut input = self::input("3 blue 99 red");
    input.next::<(u32, W<&str>)>().unwrap();
    let error = input.end().unwrap_err();
    assert_eq!(error.to_string(), "unexpected trailing input `99 red`");
    assert_eq!(error.span(), Size::new(7)..Size::new(13));
}
