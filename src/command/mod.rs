//! Command pipeline
//!
//! Raw input -> parser -> Command -> processor -> response text

pub mod parser;
pub mod processor;

pub use parser::{parse, Command, Verb};
pub use processor::process;
