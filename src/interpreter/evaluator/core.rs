use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::{binary::evaluate_binary, object::evaluate_object},
        value::Value,
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program and returns the value of its last statement.
///
/// Statements run in source order against the given environment. An empty
/// program evaluates to null. The first failing statement aborts the run;
/// effects of earlier statements remain in the environment.
///
/// # Parameters
/// - `program`: The parsed program to execute.
/// - `env`: The environment statements read from and write to.
///
/// # Returns
/// The value of the last statement, or [`Value::Null`] for an empty body.
///
/// # Errors
/// Propagates the first `RuntimeError` raised by any statement.
///
/// # Example
/// ```
/// use ryx::interpreter::{
///     environment::Environment, evaluator::core::evaluate_program, parser::core::produce_ast,
///     value::Value,
/// };
///
/// let program = produce_ast("val x = 2; x + 3").unwrap();
/// let env = Environment::global();
///
/// assert_eq!(evaluate_program(&program, &env).unwrap(), Value::Number(5.0));
/// ```
pub fn evaluate_program(program: &Program, env: &EnvRef) -> EvalResult<Value> {
    let mut last = Value::Null;

    for statement in &program.body {
        last = evaluate_statement(statement, env)?;
    }

    Ok(last)
}

/// Evaluates a single statement.
///
/// A declaration evaluates its initializer (null when absent), binds the name
/// in the current scope, and yields the bound value. An expression statement
/// yields the value of its expression.
///
/// # Errors
/// - [`RuntimeError::VariableRedeclaration`] when a declaration reuses a name
///   already bound in the current scope.
/// - Propagates any error from expression evaluation.
pub fn evaluate_statement(statement: &Statement, env: &EnvRef) -> EvalResult<Value> {
    match statement {
        Statement::VarDeclaration { identifier,
                                    constant,
                                    value,
                                    line, } => {
            let value = match value {
                Some(expr) => evaluate(expr, env)?,
                None => Value::Null,
            };

            env.borrow_mut().declare(identifier, value, *constant, *line)
        },

        Statement::Expression { expr, .. } => evaluate(expr, env),
    }
}

/// Evaluates an expression against an environment.
///
/// Dispatches on the expression kind. Member access and call expressions are
/// part of the grammar but have no runtime semantics yet, so reaching one
/// here is a runtime error rather than a parse error.
///
/// # Errors
/// - [`RuntimeError::UnknownVariable`] for an identifier not bound in any
///   enclosing scope.
/// - [`RuntimeError::InvalidAssignmentTarget`] when the left-hand side of an
///   assignment is not an identifier.
/// - [`RuntimeError::ConstantReassignment`] when assigning to a `cval`
///   binding.
/// - [`RuntimeError::UnsupportedExpression`] for member access and calls.
pub fn evaluate(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::NumericLiteral { value, .. } => Ok(Value::Number(*value)),

        Expr::Identifier { symbol, line } => Environment::lookup(env, symbol, *line),

        Expr::Binary { left,
                       op,
                       right,
                       .. } => evaluate_binary(left, *op, right, env),

        Expr::Assignment { target, value, line } => {
            let Expr::Identifier { symbol, .. } = target.as_ref() else {
                return Err(RuntimeError::InvalidAssignmentTarget { line: *line });
            };

            let value = evaluate(value, env)?;
            Environment::assign(env, symbol, value, *line)
        },

        Expr::ObjectLiteral { properties, .. } => evaluate_object(properties, env),

        Expr::Member { line, .. } => {
            Err(RuntimeError::UnsupportedExpression { kind: "Member access".to_string(),
                                                      line: *line, })
        },

        Expr::Call { line, .. } => {
            Err(RuntimeError::UnsupportedExpression { kind: "Call".to_string(),
                                                      line: *line, })
        },
    }
}
