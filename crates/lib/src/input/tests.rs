use super::{ErrorKind, IStr, Nl, Ws, W};

#[test]
fn test_columns() {
    let mut p = IStr::new(b"3   4\n4   3\n2   5\n");
    let mut rows = Vec::new();

    while let Some(Nl([a, b])) = p.try_next::<Nl<[u32; 2]>>().unwrap() {
        rows.push((a, b));
    }

    assert_eq!(rows, [(3, 4), (4, 3), (2, 5)]);
    assert!(p.is_empty());
}

#[test]
fn test_not_integer() {
    let mut p = IStr::new(b"1 x\n");
    let e = p.try_next::<Nl<[u32; 2]>>().unwrap_err();
    assert_eq!(e.span(), 2..3);
    assert!(matches!(e.kind(), ErrorKind::NotInteger("x")));
}

#[test]
fn test_short_row() {
    let mut p = IStr::new(b"1\n2 3\n");
    let e = p.try_next::<Nl<[u32; 2]>>().unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::BadArray(2, 1)));
}

#[test]
fn test_long_row() {
    let mut p = IStr::new(b"1 2 3\n");
    let e = p.try_next::<Nl<[u32; 2]>>().unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::ArrayCapacity(2)));
}

#[test]
fn test_tuple() {
    let mut p = IStr::new(b"1 2 -3");
    let (a, b, c) = p.next::<(u32, u64, i32)>().unwrap();
    assert_eq!((a, b, c), (1, 2, -3));
}

#[test]
fn test_missing_tuple_field() {
    let mut p = IStr::new(b"1");
    let e = p.next::<(u32, u32)>().unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_try_line() {
    let mut p = IStr::new(b"7 6 4 2 1\n1 2 7 8 9");

    let first: Vec<i32> = p.try_line().unwrap().unwrap();
    assert_eq!(first, [7, 6, 4, 2, 1]);

    let second: Vec<i32> = p.try_line().unwrap().unwrap();
    assert_eq!(second, [1, 2, 7, 8, 9]);

    assert!(p.try_line::<Vec<i32>>().unwrap().is_none());
}

#[test]
fn test_ws() {
    let mut p = IStr::new(b"\n\n  7 rest");
    let Ws(lines) = p.next().unwrap();
    assert_eq!(lines, 2);
    assert_eq!(p.next::<u32>().unwrap(), 7);
}

#[test]
fn test_skip_word() {
    let mut p = IStr::new(b"label 42");
    p.next::<W>().unwrap();
    assert_eq!(p.next::<u32>().unwrap(), 42);
}

#[test]
fn test_next_word() {
    let mut p = IStr::new(b"hello world");
    let (at, word) = p.try_next_word::<&str>().unwrap().unwrap();
    assert_eq!((at, word), (0, "hello"));
    assert_eq!(p.as_bstr().to_string(), " world");
    assert_eq!(p.index(), 5);
}
