use super::ast::*;
use super::*;

mod line_test;

fn expr(s: &str) -> Expression {
    match parse_expression(&tokenize(s)) {
        Ok(e) => e,
        Err(e) => panic!("{} : {:?}", s, e),
    }
}

fn expr_err(s: &str) -> ErrorCode {
    match parse_expression(&tokenize(s)) {
        Ok(e) => panic!("{} parsed as {}", s, e),
        Err(e) => e.code(),
    }
}

fn stmt(s: &str) -> Statement {
    match parse_statement(&tokenize(s)) {
        Ok(st) => st,
        Err(e) => panic!("{} : {:?}", s, e),
    }
}

fn stmt_err(s: &str) -> Error {
    match parse_statement(&tokenize(s)) {
        Ok(st) => panic!("{} parsed as {}", s, st),
        Err(e) => e,
    }
}
