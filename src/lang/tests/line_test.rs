use super::*;

#[test]
fn test_numbered_line() {
    let line = Line::parse("10 LET X = 1").unwrap().unwrap();
    assert_eq!(line.to_string(), "10 LET X = 1");
    assert_eq!(line.into_parts().0, 10);
}

#[test]
fn test_crlf() {
    let line = Line::parse("30 END\r\n").unwrap().unwrap();
    assert_eq!(line.into_parts(), (30, Some(Statement::End)));
}

#[test]
fn test_blank_line() {
    assert_eq!(Line::parse("").unwrap(), None);
    assert_eq!(Line::parse("   ").unwrap(), None);
}

#[test]
fn test_bare_line_number() {
    let line = Line::parse("40").unwrap().unwrap();
    assert_eq!(line.into_parts(), (40, None));
}

#[test]
fn test_bad_line_number() {
    assert_eq!(
        Line::parse("PRINT 1").unwrap_err().code(),
        ErrorCode::IllegalLineNumber
    );
    assert_eq!(
        Line::parse("0 END").unwrap_err().code(),
        ErrorCode::IllegalLineNumber
    );
}

#[test]
fn test_error_tagged_with_line() {
    let e = Line::parse("20 PRINT").unwrap_err();
    assert_eq!(e.line_number(), Some(20));
    assert_eq!(
        e.to_string(),
        "parse error: incomplete statement in 20; usage: PRINT <expression>"
    );
}
