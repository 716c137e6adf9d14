use super::Var;
use crate::error;
use crate::lang::ast::{Expression, Operator};
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn add(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_add(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_sub(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_mul(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    /// A negative exponent yields zero.
    pub fn power(lhs: i32, rhs: i32) -> Result<i32> {
        match u32::try_from(rhs) {
            Ok(exp) => lhs.checked_pow(exp).ok_or_else(|| error!(Overflow)),
            Err(_) => Ok(0),
        }
    }

    pub fn binary(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Add => Operation::add(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Power => Operation::power(lhs, rhs),
        }
    }
}

impl Expression {
    pub fn eval(&self, vars: &Var) -> Result<i32> {
        use Expression::*;
        match self {
            Constant(n) => Ok(*n),
            Identifier(name) => vars.fetch(name),
            Compound(op, lhs, rhs) => {
                let right = rhs.eval(vars)?;
                let left = lhs.eval(vars)?;
                Operation::binary(*op, left, right)
            }
        }
    }
}
