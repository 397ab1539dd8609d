//! Left-to-right evaluation of whitespace separated integer expressions.
//!
//! Operators are applied strictly in the order they appear, there is no
//! precedence and no grouping: `2 * 10 + 2 / 2` is `((2 * 10) + 2) / 2`.

pub use error::EvaluationError;
pub use reducer::evaluate;
pub use token::{tokenize, Operator, Token};

mod error;
mod reducer;
mod token;
