use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, evaluate},
        value::Value,
    },
};

/// Evaluates a binary arithmetic expression.
///
/// Both operands are evaluated left to right before their types are
/// inspected. When both are numbers the operator is applied with IEEE 754
/// semantics, so `1 / 0` is infinity and `1 % 0` is NaN rather than an
/// error. Any other operand combination quietly produces null.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `op`: The operator to apply.
/// - `right`: Right operand expression.
/// - `env`: Environment the operands are evaluated against.
///
/// # Returns
/// A [`Value::Number`], or [`Value::Null`] when either operand is not
/// numeric.
///
/// # Errors
/// Propagates any error from operand evaluation.
pub fn evaluate_binary(left: &Expr,
                       op: BinaryOperator,
                       right: &Expr,
                       env: &EnvRef)
                       -> EvalResult<Value> {
    let left = evaluate(left, env)?;
    let right = evaluate(right, env)?;

    let (Some(left), Some(right)) = (left.as_number(), right.as_number()) else {
        return Ok(Value::Null);
    };

    let result = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Mod => left % right,
    };

    Ok(Value::Number(result))
}
