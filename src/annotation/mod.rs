//! Annotation line grammar and line splitting.

mod lines;
mod parser;

pub use lines::{Line, lines};
pub use parser::{ParsedLine, parse_line};
