mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("PRINT 1+2*3");
    assert_eq!(exec(&mut r), "7\n");
    r.enter("PRINT (1+2)*3");
    assert_eq!(exec(&mut r), "9\n");
    r.enter("PRINT 2**3**2");
    assert_eq!(exec(&mut r), "512\n");
}

#[test]
fn test_unary() {
    let mut r = Runtime::default();
    r.enter("PRINT -1+2");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("PRINT 1-(-2)");
    assert_eq!(exec(&mut r), "3\n");
    r.enter("PRINT 2**(-1)");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_variables() {
    let mut r = Runtime::default();
    r.enter("LET a = 1+2*3");
    r.enter("PRINT a*2");
    assert_eq!(exec(&mut r), "14\n");
    r.enter("PRINT b");
    assert_eq!(
        exec(&mut r),
        "runtime error: not declared; `b`\n"
    );
}

#[test]
fn test_errors() {
    let mut r = Runtime::default();
    r.enter("PRINT 1/0");
    assert_eq!(exec(&mut r), "runtime error: divide by zero\n");
    r.enter("PRINT ()");
    assert_eq!(
        exec(&mut r),
        "parse error: illegal expression; empty parentheses\n"
    );
    r.enter("PRINT (1))");
    assert_eq!(
        exec(&mut r),
        "parse error: unmatched parenthesis; expected \"(\" to match \")\"\n"
    );
    r.enter("PRINT +");
    assert_eq!(exec(&mut r), "parse error: incomplete expression\n");
}
