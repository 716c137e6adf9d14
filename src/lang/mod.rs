/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::tokenize;
pub use line::Line;
pub use parse::{parse_expression, parse_statement};
pub use token::{Token, Word};

pub mod ast;

#[cfg(test)]
mod tests;
