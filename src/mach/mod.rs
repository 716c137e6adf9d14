/*!
## Rust Machine Module

This Rust module stores and executes BASIC programs one line at a time.

*/

mod listing;
mod operation;
mod program;
mod runtime;
mod var;

pub use listing::Listing;
pub use operation::Operation;
pub use program::Program;
pub use program::State;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

#[cfg(test)]
mod tests;
