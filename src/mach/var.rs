use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// The evaluation context of one program. `LET` and `INPUT` write here,
/// expressions read from here.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(NotDeclared; format!("`{}`", var_name))),
        }
    }

    pub fn store(&mut self, var_name: &str, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        }
    }
}
