extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::mach::{Event, Program, Runtime};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(file: Option<String>, run: bool) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted, file, run) {
        eprintln!("{}", error);
    }
}

fn main_loop(
    interrupted: Arc<AtomicBool>,
    file: Option<String>,
    run: bool,
) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    command.set_prompt("] ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    if let Some(filename) = file {
        match load(&filename) {
            Ok(program) => {
                runtime.set_program(program);
                if run {
                    runtime.enter("RUN");
                }
            }
            Err(error) => print_error(&command, &error)?,
        }
    }

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                runtime.enter(&string);
                if !string.trim().is_empty() {
                    command.add_history_unique(string);
                }
            }
            Event::Input(name) => {
                input.set_prompt(&format!("{} ? ", name))?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.enter(&string),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => print_error(&command, &error.to_string())?,
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Load(filename) => match load(&filename) {
                Ok(program) => runtime.set_program(program),
                Err(error) => print_error(&command, &error)?,
            },
            Event::Quit => break,
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &str) -> std::io::Result<()> {
    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(error)))
}

/// Reads a whole program. The current program is only replaced when every
/// line of the file parses.
fn load(filename: &str) -> Result<Program, String> {
    let mut program = Program::new();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => return Err(format!("{}: {}", filename, error)),
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(format!("{}: {}", filename, error)),
            Ok(line) => {
                if let Err(error) = program.load_str(&line) {
                    return Err(format!(
                        "{}; in line {} of {}",
                        error,
                        index + 1,
                        filename
                    ));
                }
            }
        }
    }
    Ok(program)
}
