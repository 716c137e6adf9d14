use super::*;

#[test]
fn test_precedence() {
    let vars = Var::new();
    assert_eq!(eval("1+2*3", &vars), Ok(7));
    assert_eq!(eval("(1+2)*3", &vars), Ok(9));
    assert_eq!(eval("-1+2", &vars), Ok(1));
    assert_eq!(eval("1-(-2)", &vars), Ok(3));
    assert_eq!(eval("10-4-3", &vars), Ok(3));
}

#[test]
fn test_power() {
    let vars = Var::new();
    assert_eq!(eval("2**3", &vars), Ok(8));
    assert_eq!(eval("2**3**2", &vars), Ok(512));
    assert_eq!(eval("5**0", &vars), Ok(1));
    assert_eq!(eval("2**(-1)", &vars), Ok(0));
    assert_eq!(eval("2**40", &vars), Err(ErrorCode::Overflow));
}

#[test]
fn test_integer_division() {
    let vars = Var::new();
    assert_eq!(eval("7/2", &vars), Ok(3));
    assert_eq!(eval("-7/2", &vars), Ok(-3));
    assert_eq!(eval("1/0", &vars), Err(ErrorCode::DivisionByZero));
}

#[test]
fn test_overflow() {
    let vars = Var::new();
    assert_eq!(eval("2147483647+1", &vars), Err(ErrorCode::Overflow));
    assert_eq!(eval("65536*65536", &vars), Err(ErrorCode::Overflow));
}

#[test]
fn test_variables() {
    let mut vars = Var::new();
    assert_eq!(eval("a*2", &vars), Err(ErrorCode::NotDeclared));
    vars.store("a", 21);
    assert_eq!(eval("a*2", &vars), Ok(42));
    vars.store("a", 1);
    assert_eq!(eval("a*2", &vars), Ok(2));
    assert_eq!(eval("A*2", &vars), Err(ErrorCode::NotDeclared));
}

#[test]
fn test_not_declared_message() {
    let vars = Var::new();
    let e = parse_expression(&tokenize("zz"))
        .unwrap()
        .eval(&vars)
        .unwrap_err();
    assert_eq!(e.to_string(), "runtime error: not declared; `zz`");
}

#[test]
fn test_operation() {
    use crate::lang::ast::Operator;
    assert_eq!(Operation::binary(Operator::Subtract, 3, 5).unwrap(), -2);
    assert_eq!(Operation::power(-2, 3).unwrap(), -8);
    assert_eq!(Operation::power(3, -2).unwrap(), 0);
    assert_eq!(
        Operation::divide(i32::MIN, -1).unwrap_err().code(),
        ErrorCode::Overflow
    );
}

#[test]
fn test_long_sum() {
    let vars = Var::new();
    let sum = vec!["1"; 256].join("+");
    assert_eq!(eval(&sum, &vars), Ok(256));
    let sum = vec!["1"; 257].join("+");
    assert_eq!(parse_expression(&tokenize(&sum)).unwrap_err().code(), ErrorCode::IllegalExpression);
}
