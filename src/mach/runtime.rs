use super::{Program, State};
use crate::error;
use crate::lang::{parse_statement, tokenize, Error, Line, Token};
use std::collections::VecDeque;

const HELP: &str = "\
Enter a numbered line to store it, or a bare line number to delete it.
  LET <varname> = <expression>     PRINT <expression>     INPUT <varname>
  GOTO <linenumber>                END                    REM [content]
  IF <expression> <operator> <expression> THEN <linenumber>
Commands: RUN, LIST, TREE, LOAD <file>, CLEAR, HELP, QUIT";

/// What the terminal should do next.
#[derive(Debug)]
pub enum Event {
    /// Idle. Read a command.
    Stopped,
    /// Out of cycles with more to do. Call `execute` again.
    Running,
    Print(String),
    /// Read a value for the named variable.
    Input(String),
    Error(Error),
    List(String),
    Load(String),
    Quit,
}

/// ## Interactive driver
///
/// Routes typed lines to the program and turns its step results into
/// events for the terminal.
#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    events: VecDeque<Event>,
    pending: Option<String>,
    running: bool,
    resume: bool,
    interrupted: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn set_program(&mut self, program: Program) {
        self.stop();
        self.program = program;
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn enter(&mut self, s: &str) {
        if let Some(name) = self.pending.take() {
            self.variable_input(name, s);
            return;
        }
        let tokens = tokenize(s);
        let command = match tokens.first() {
            Some(token) => token,
            None => return,
        };
        match command.as_str() {
            "RUN" => self.running = true,
            "LOAD" => {
                let filename = s.trim_start_matches(' ')["LOAD".len()..].trim();
                if filename.is_empty() {
                    self.report(error!(IllegalCommand; "usage: LOAD <file>"));
                } else {
                    self.events.push_back(Event::Load(filename.to_string()));
                }
            }
            "CLEAR" => self.set_program(Program::new()),
            "LIST" => self.events.push_back(Event::List(self.program.render_source())),
            "TREE" => self.events.push_back(Event::List(self.program.render_tree())),
            "HELP" => self.events.push_back(Event::Print(HELP.to_string())),
            "QUIT" => self.events.push_back(Event::Quit),
            "LET" | "PRINT" | "INPUT" => self.direct(&tokens),
            _ if command.is_number() => match Line::parse(s) {
                Ok(Some(line)) => {
                    let (number, statement) = line.into_parts();
                    if let Err(e) = self.program.insert(number, statement) {
                        self.report(e);
                    }
                }
                Ok(None) => {}
                Err(e) => self.report(e),
            },
            _ => self.report(error!(IllegalCommand; format!("`{}`", command))),
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if self.interrupted {
            self.interrupted = false;
            if self.running || self.pending.is_some() {
                let line_number = if self.running { self.program.pc() } else { None };
                self.stop();
                return Event::Error(error!(Break, line_number));
            }
        }
        if let Some(name) = &self.pending {
            return Event::Input(name.clone());
        }
        if !self.running {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            let skip = std::mem::replace(&mut self.resume, false);
            match self.program.step(skip) {
                Err(e) => {
                    self.stop();
                    return Event::Error(e);
                }
                Ok((State::Inputting, name)) => {
                    self.pending = Some(name.clone());
                    return Event::Input(name);
                }
                Ok((State::Begin, output)) => {
                    self.running = false;
                    if output.is_empty() {
                        return Event::Stopped;
                    }
                    return Event::Print(output);
                }
                Ok((State::Running, output)) => {
                    if !output.is_empty() {
                        return Event::Print(output);
                    }
                }
            }
        }
        Event::Running
    }

    fn stop(&mut self) {
        self.running = false;
        self.resume = false;
        self.pending = None;
        self.program.rewind();
    }

    fn report(&mut self, error: Error) {
        self.events.push_back(Event::Error(error));
    }

    fn direct(&mut self, tokens: &[Token]) {
        let statement = match parse_statement(tokens) {
            Ok(statement) => statement,
            Err(e) => return self.report(e),
        };
        match self.program.step_direct(&statement) {
            Ok((State::Inputting, name)) => self.pending = Some(name),
            Ok((_, output)) => {
                if !output.is_empty() {
                    self.events.push_back(Event::Print(output));
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn variable_input(&mut self, name: String, s: &str) {
        match s.trim().parse::<i32>() {
            Ok(value) => {
                self.program.set_variable(&name, value);
                if self.running {
                    self.resume = true;
                }
            }
            Err(_) => {
                self.report(error!(IllegalNumber; "usage: ? <int>"));
                self.pending = Some(name);
            }
        }
    }
}
