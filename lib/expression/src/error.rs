use derive_more::Display;

use crate::token::Operator;

/// Reasons an expression was rejected, each carrying the full expression text
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[display(fmt = "Error: no left operand for '{}' in \"{}\"", _0, _1)]
    NoLeftOperand(Operator, String),

    #[display(fmt = "Error: no right operand for '{}' in \"{}\"", _0, _1)]
    NoRightOperand(Operator, String),

    #[display(fmt = "Error: adjacent ops '{}' & '{}' in \"{}\"", _0, _1, _2)]
    AdjacentOperators(Operator, Operator, String),

    #[display(fmt = "Error: no operator between {} and {} in \"{}\"", _0, _1, _2)]
    NoOperator(i64, i64, String),

    #[display(fmt = "Error: cannot convert {} to int in \"{}\"", _0, _1)]
    NotANumber(String, String),

    #[display(fmt = "Error: cannot divide {} by zero in \"{}\"", _0, _1)]
    DivisionByZero(i64, String),

    #[display(fmt = "Error: {} {} {} overflows in \"{}\"", _1, _0, _2, _3)]
    Overflow(Operator, i64, i64, String),
}

impl std::error::Error for EvaluationError {}

impl EvaluationError {
    pub fn expression(&self) -> &str {
        match self {
            Self::NoLeftOperand(_, e)
            | Self::NoRightOperand(_, e)
            | Self::AdjacentOperators(_, _, e)
            | Self::NoOperator(_, _, e)
            | Self::NotANumber(_, e)
            | Self::DivisionByZero(_, e)
            | Self::Overflow(_, _, _, e) => e,
        }
    }
}
