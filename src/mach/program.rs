use super::{Listing, Var};
use crate::error;
use crate::lang::{ast::Statement, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Where the program stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Idle, or a full pass just completed. The next step starts from the top.
    Begin,
    /// One step executed and more remain.
    Running,
    /// Suspended until the variable named in the output receives a value.
    Inputting,
}

/// ## Stored program and its executor
///
/// Each call to [`Program::step`] executes exactly one line and returns.
/// Running a program means calling `step` until it reports `Begin` or
/// `Inputting`. An `INPUT` line is resumed with `step(true)` once
/// [`Program::set_variable`] has supplied the value.
#[derive(Debug, Default)]
pub struct Program {
    listing: Listing,
    pc: Option<LineNumber>,
    vars: Var,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    pub fn pc(&self) -> Option<LineNumber> {
        self.pc
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Replaces whatever is at `line_number`. `None` only deletes.
    pub fn insert(&mut self, line_number: LineNumber, statement: Option<Statement>) -> Result<()> {
        match statement {
            Some(statement) => {
                self.listing.insert(line_number, statement)?;
            }
            None => {
                self.listing.remove(line_number);
            }
        }
        self.rewind();
        Ok(())
    }

    pub fn load_str(&mut self, line: &str) -> Result<()> {
        self.listing.load_str(line)?;
        self.rewind();
        Ok(())
    }

    /// Moves pc back to the lowest line.
    pub fn rewind(&mut self) {
        self.pc = self.listing.first();
    }

    pub fn set_variable(&mut self, name: &str, value: i32) {
        self.vars.store(name, value);
    }

    pub fn render_source(&self) -> String {
        self.listing.list(self.pc)
    }

    pub fn render_tree(&self) -> String {
        self.listing.tree(self.pc)
    }

    /// Executes a statement that has no line number. pc is not touched.
    pub fn step_direct(&mut self, statement: &Statement) -> Result<(State, String)> {
        match statement {
            Statement::Let(name, expr) => {
                let value = expr.eval(&self.vars)?;
                self.vars.store(name, value);
                Ok((State::Running, String::new()))
            }
            Statement::Print(expr) => Ok((State::Running, expr.eval(&self.vars)?.to_string())),
            Statement::Input(name) => {
                self.vars.store(name, 0);
                Ok((State::Inputting, name.clone()))
            }
            _ => Err(error!(UnknownStatement; format!("{}", statement))),
        }
    }

    /// Executes the line at pc. With `skip` the line's effect is bypassed
    /// and pc only advances, which is how a pending `INPUT` resumes.
    pub fn step(&mut self, skip: bool) -> Result<(State, String)> {
        let pc = match self.pc {
            Some(pc) => pc,
            None => return Ok((State::Begin, String::new())),
        };
        match self.execute(pc, skip) {
            Err(e) => Err(e.in_line_number(pc)),
            Ok(r) => Ok(r),
        }
    }

    fn execute(&mut self, pc: LineNumber, skip: bool) -> Result<(State, String)> {
        let mut output = String::new();
        if !skip {
            let statement = match self.listing.get(pc) {
                Some(statement) => statement,
                None => return Err(error!(InternalError; "program counter lost")),
            };
            match statement {
                Statement::Rem(_) => {}
                Statement::Let(name, expr) => {
                    let value = expr.eval(&self.vars)?;
                    self.vars.store(name, value);
                }
                Statement::Print(expr) => {
                    output = expr.eval(&self.vars)?.to_string();
                }
                Statement::Input(name) => {
                    return Ok((State::Inputting, name.clone()));
                }
                Statement::Goto(target) => {
                    self.pc = Some(self.listing.resolve(*target)?);
                    return Ok((State::Running, output));
                }
                Statement::If(lhs, cmp, rhs, target) => {
                    let left = lhs.eval(&self.vars)?;
                    let right = rhs.eval(&self.vars)?;
                    if cmp.holds(left, right) {
                        self.pc = Some(self.listing.resolve(*target)?);
                        return Ok((State::Running, output));
                    }
                }
                Statement::End => {
                    self.pc = self.listing.first();
                    return Ok((State::Begin, output));
                }
            }
        }
        if Some(pc) == self.listing.last() {
            self.rewind();
            return Ok((State::Begin, output));
        }
        self.pc = self.listing.after(pc);
        Ok((State::Running, output))
    }
}
