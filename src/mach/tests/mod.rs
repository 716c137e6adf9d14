use super::*;
use crate::lang::{parse_expression, tokenize, ErrorCode};

mod eval_test;

fn eval(s: &str, vars: &Var) -> Result<i32, ErrorCode> {
    match parse_expression(&tokenize(s)) {
        Ok(expr) => expr.eval(vars).map_err(|e| e.code()),
        Err(e) => panic!("{} : {:?}", s, e),
    }
}

fn load(lines: &[&str]) -> Program {
    let mut program = Program::new();
    for line in lines {
        if let Err(e) = program.load_str(line) {
            panic!("{} : {:?}", line, e);
        }
    }
    program
}
