use log::{debug, trace};

use crate::error::EvaluationError;
use crate::token::{tokenize, Operator, Token};

/// Evaluates `expression` by folding its tokens from left to right
///
/// Returns `Ok(None)` if the expression contains no tokens. The stack never
/// holds more than a seed operand and the operator waiting for its right
/// hand side.
pub fn evaluate(expression: &str) -> Result<Option<i64>, EvaluationError> {
    let tokens = tokenize(expression);
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut stack: Vec<Token> = Vec::with_capacity(2);
    for raw in tokens {
        let token = Token::classify(raw)
            .map_err(|_| EvaluationError::NotANumber(raw.to_string(), expression.to_string()))?;

        match token {
            Token::Operator(operator) => match stack.last() {
                None => {
                    return Err(EvaluationError::NoLeftOperand(
                        operator,
                        expression.to_string(),
                    ))
                }
                Some(Token::Operator(previous)) => {
                    return Err(EvaluationError::AdjacentOperators(
                        *previous,
                        operator,
                        expression.to_string(),
                    ))
                }
                Some(Token::Operand(_)) => stack.push(token),
            },
            Token::Operand(right) => match stack.pop() {
                None => stack.push(token),
                Some(Token::Operator(operator)) => {
                    let left = match stack.pop() {
                        Some(Token::Operand(left)) => left,
                        Some(Token::Operator(previous)) => {
                            return Err(EvaluationError::AdjacentOperators(
                                previous,
                                operator,
                                expression.to_string(),
                            ))
                        }
                        None => {
                            return Err(EvaluationError::NoLeftOperand(
                                operator,
                                expression.to_string(),
                            ))
                        }
                    };

                    let value = fold(operator, left, right, expression)?;
                    debug!("{} {} {} => {}", left, operator, right, value);
                    stack.push(Token::Operand(value));
                }
                Some(Token::Operand(left)) => {
                    return Err(EvaluationError::NoOperator(
                        left,
                        right,
                        expression.to_string(),
                    ))
                }
            },
        }
    }

    match stack.as_slice() {
        [Token::Operand(value)] => {
            trace!("\"{}\" => {}", expression, value);
            Ok(Some(*value))
        }
        [Token::Operand(_), Token::Operator(operator)] => Err(EvaluationError::NoRightOperand(
            *operator,
            expression.to_string(),
        )),
        _ => panic!("Invalid evaluation stack {:?} for \"{}\"", stack, expression),
    }
}

fn fold(
    operator: Operator,
    left: i64,
    right: i64,
    expression: &str,
) -> Result<i64, EvaluationError> {
    if operator == Operator::Div && right == 0 {
        return Err(EvaluationError::DivisionByZero(left, expression.to_string()));
    }
    operator
        .apply(left, right)
        .ok_or_else(|| EvaluationError::Overflow(operator, left, right, expression.to_string()))
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_left_fold() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(evaluate("1 + 1")?, Some(2));
        assert_eq!(evaluate("2 * 4")?, Some(8));
        assert_eq!(evaluate("10 / 2")?, Some(5));
        assert_eq!(evaluate("2 * 10 + 2 / 2")?, Some(11));
        assert_eq!(evaluate("1 + 2 * 3")?, Some(9));
        assert_eq!(evaluate("10 - 4 - 3")?, Some(3));
        assert_eq!(evaluate("42")?, Some(42));
        assert_eq!(evaluate("  7   -\t9 ")?, Some(-2));
        Ok(())
    }

    #[test]
    fn test_negative_literals() -> Result<(), Box<dyn std::error::Error>> {
        // `-2` is a literal, only a lone `-` subtracts
        assert_eq!(evaluate("-2 * 2 * 4")?, Some(-16));
        assert_eq!(evaluate("3 - -2")?, Some(5));
        assert_eq!(
            evaluate("3 -2"),
            Err(EvaluationError::NoOperator(3, -2, "3 -2".to_string()))
        );
        assert_eq!(
            evaluate("- 2"),
            Err(EvaluationError::NoLeftOperand(Operator::Sub, "- 2".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_floor_division() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(evaluate("-7 / 2")?, Some(-4));
        assert_eq!(evaluate("7 / -2")?, Some(-4));
        assert_eq!(evaluate("7 / 2")?, Some(3));
        assert_eq!(evaluate("1 - 8 / 2")?, Some(-4));
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(evaluate("")?, None);
        assert_eq!(evaluate("   ")?, None);
        assert_eq!(evaluate("\t\n")?, None);
        Ok(())
    }

    #[test]
    fn test_no_left_operand() {
        let err = evaluate("+ 1").unwrap_err();
        assert_eq!(err, EvaluationError::NoLeftOperand(Operator::Add, "+ 1".to_string()));
        assert_eq!(err.to_string(), "Error: no left operand for '+' in \"+ 1\"");
    }

    #[test]
    fn test_adjacent_operators() {
        assert_eq!(
            evaluate("1 + + 2"),
            Err(EvaluationError::AdjacentOperators(
                Operator::Add,
                Operator::Add,
                "1 + + 2".to_string()
            ))
        );
        assert_eq!(
            evaluate("1 * / 2"),
            Err(EvaluationError::AdjacentOperators(
                Operator::Mul,
                Operator::Div,
                "1 * / 2".to_string()
            ))
        );
    }

    #[test]
    fn test_no_operator() {
        let err = evaluate("1 2").unwrap_err();
        assert_eq!(err, EvaluationError::NoOperator(1, 2, "1 2".to_string()));
        assert_eq!(err.to_string(), "Error: no operator between 1 and 2 in \"1 2\"");

        // The left operand is the folded value so far
        assert_eq!(
            evaluate("1 + 2 5"),
            Err(EvaluationError::NoOperator(3, 5, "1 + 2 5".to_string()))
        );
    }

    #[test]
    fn test_not_a_number() {
        let err = evaluate("1 + x").unwrap_err();
        assert_eq!(
            err,
            EvaluationError::NotANumber("x".to_string(), "1 + x".to_string())
        );
        assert_eq!(err.to_string(), "Error: cannot convert x to int in \"1 + x\"");

        assert_eq!(
            evaluate("1+2"),
            Err(EvaluationError::NotANumber("1+2".to_string(), "1+2".to_string()))
        );
    }

    #[test]
    fn test_first_error_wins() {
        // Evaluation stops at the operator before ever reading `x`
        assert_eq!(
            evaluate("1 + + x"),
            Err(EvaluationError::AdjacentOperators(
                Operator::Add,
                Operator::Add,
                "1 + + x".to_string()
            ))
        );
    }

    #[test]
    fn test_no_right_operand() {
        assert_eq!(
            evaluate("1 +"),
            Err(EvaluationError::NoRightOperand(Operator::Add, "1 +".to_string()))
        );
        assert_eq!(
            evaluate("2 * 3 -"),
            Err(EvaluationError::NoRightOperand(Operator::Sub, "2 * 3 -".to_string()))
        );
    }

    #[test]
    fn test_arithmetic_errors() {
        assert_eq!(
            evaluate("5 / 0"),
            Err(EvaluationError::DivisionByZero(5, "5 / 0".to_string()))
        );
        assert_eq!(
            evaluate("9223372036854775807 + 1"),
            Err(EvaluationError::Overflow(
                Operator::Add,
                i64::MAX,
                1,
                "9223372036854775807 + 1".to_string()
            ))
        );
    }

    #[test]
    fn test_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let expression = "2 * 10 + 2 / 2";
        assert_eq!(evaluate(expression)?, evaluate(expression)?);
        assert_eq!(evaluate("1 2"), evaluate("1 2"));

        // A failed evaluation leaves nothing behind
        assert!(evaluate("1 + +").is_err());
        assert_eq!(evaluate("1 + 1")?, Some(2));
        Ok(())
    }

    #[test]
    fn test_concurrent() {
        let handles: Vec<_> = (0..8_i64)
            .map(|i| thread::spawn(move || evaluate(&format!("{} * 2 + 1", i))))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().expect("evaluation thread panicked");
            assert_eq!(result, Ok(Some(i as i64 * 2 + 1)));
        }
    }
}
