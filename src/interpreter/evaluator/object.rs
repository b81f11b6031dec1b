use crate::{
    ast::Property,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, evaluate},
        value::Value,
    },
};

/// Evaluates an object literal into an object value.
///
/// Properties are evaluated in declaration order. A shorthand property looks
/// its key up in the environment, so `{ a }` fails when no variable `a` is in
/// scope. A duplicate key overwrites the earlier value but keeps the earlier
/// position.
///
/// # Parameters
/// - `properties`: The literal's properties in declaration order.
/// - `env`: Environment value expressions are evaluated against.
///
/// # Returns
/// A [`Value::Object`] with its entries in first-appearance order.
///
/// # Errors
/// - [`RuntimeError::UnknownVariable`] when a shorthand key is not bound.
/// - Propagates any error from value expression evaluation.
///
/// [`RuntimeError::UnknownVariable`]: crate::error::RuntimeError::UnknownVariable
pub fn evaluate_object(properties: &[Property], env: &EnvRef) -> EvalResult<Value> {
    let mut entries: Vec<(String, Value)> = Vec::new();

    for property in properties {
        let value = match &property.value {
            Some(expr) => evaluate(expr, env)?,
            None => Environment::lookup(env, &property.key, property.line)?,
        };

        match entries.iter_mut().find(|(key, _)| key == &property.key) {
            Some(entry) => entry.1 = value,
            None => entries.push((property.key.clone(), value)),
        }
    }

    Ok(Value::Object(entries))
}
