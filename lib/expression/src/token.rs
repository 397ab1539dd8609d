use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Binary function backing an operator, `None` if the result is not an `i64`
type Operation = fn(i64, i64) -> Option<i64>;

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    fn operation(self) -> Operation {
        match self {
            Operator::Add => i64::checked_add,
            Operator::Sub => i64::checked_sub,
            Operator::Mul => i64::checked_mul,
            Operator::Div => floor_div,
        }
    }

    /// Applies the operator to `left` and `right`
    ///
    /// Returns `None` on overflow or division by zero
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        (self.operation())(left, right)
    }
}

/// Integer division rounding toward negative infinity, so `-7 / 2 == -4`
fn floor_div(left: i64, right: i64) -> Option<i64> {
    let quotient = left.checked_div(right)?;
    if left % right != 0 && (left < 0) != (right < 0) {
        return Some(quotient - 1);
    }
    Some(quotient)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operator(Operator),
    Operand(i64),
}

impl Token {
    /// Only the exact strings `+`, `-`, `*` and `/` are operators, anything
    /// else is parsed as a decimal literal. `-` is therefore subtraction but
    /// `-2` is the operand minus two.
    pub fn classify(raw: &str) -> Result<Token, ParseIntError> {
        match raw.parse::<Operator>() {
            Ok(operator) => Ok(Token::Operator(operator)),
            Err(_) => raw.parse().map(Token::Operand),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Operand(value) => write!(f, "{}", value),
        }
    }
}

pub fn tokenize(expression: &str) -> Vec<&str> {
    expression.split_whitespace().collect()
}
