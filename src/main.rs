//! # BASIC
//!
//! A line-numbered BASIC interpreter for the terminal.
//!

mod term;
use clap::Parser;

/// Interactive line-numbered BASIC.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the loaded program immediately.
    #[arg(short, long)]
    run: bool,

    /// Program source to load at startup.
    file: Option<String>,
}

fn main() {
    let args = Args::parse();
    term::main(args.file, args.run);
}
