//! # Line BASIC
//!
//! A small line-numbered BASIC. Source lines are tokenized, parsed into
//! syntax trees, stored by line number and executed one line per call.
//!
//! ```
//! use basic::mach::{Program, State};
//!
//! let mut program = Program::new();
//! program.load_str("10 LET X = 6 * 7").unwrap();
//! program.load_str("20 PRINT X").unwrap();
//! assert_eq!(program.step(false).unwrap(), (State::Running, String::new()));
//! assert_eq!(program.step(false).unwrap(), (State::Begin, "42".to_string()));
//! ```
//!
//! `INPUT` doesn't block. The step returns [`mach::State::Inputting`] and the
//! caller supplies the value with [`mach::Program::set_variable`] before
//! stepping again with `skip` set.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
