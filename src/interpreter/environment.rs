use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A shared handle to an [`Environment`].
///
/// Scopes form a parent-linked chain: each child holds a reference-counted
/// handle to its parent, so the parent's storage outlives every descendant
/// still in use without any manual lifetime management.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope mapping names to values.
///
/// An environment records which of its bindings are constant and optionally
/// links to an enclosing parent scope. Name resolution searches the scope
/// itself first and then walks the parent chain outward.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
    constants: HashSet<String>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty scope with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope enclosed by `parent`.
    #[must_use]
    pub fn with_parent(parent: EnvRef) -> Self {
        Self { variables: HashMap::new(),
               constants: HashSet::new(),
               parent: Some(parent), }
    }

    /// Creates the root scope with the builtin bindings.
    ///
    /// The root environment binds exactly three constants: `true`, `false`,
    /// and `null`. Anything beyond that (demo values, host bindings) is the
    /// caller's responsibility, declared explicitly after construction.
    ///
    /// # Example
    /// ```
    /// use ryx::interpreter::{environment::Environment, value::Value};
    ///
    /// let env = Environment::global();
    ///
    /// assert_eq!(Environment::lookup(&env, "null", 1).unwrap(), Value::Null);
    /// assert_eq!(Environment::lookup(&env, "true", 1).unwrap(), Value::Bool(true));
    /// ```
    #[must_use]
    pub fn global() -> EnvRef {
        let mut environment = Self::new();

        for (name, value) in [("true", Value::Bool(true)),
                              ("false", Value::Bool(false)),
                              ("null", Value::Null)]
        {
            environment.variables.insert(name.to_string(), value);
            environment.constants.insert(name.to_string());
        }

        Rc::new(RefCell::new(environment))
    }

    /// Declares a new binding in this scope.
    ///
    /// Shadowing an outer scope is allowed; declaring a name twice in the
    /// same scope is not.
    ///
    /// # Errors
    /// Returns [`RuntimeError::VariableRedeclaration`] if `name` already
    /// exists in this scope.
    ///
    /// # Example
    /// ```
    /// use ryx::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut scope = Environment::new();
    ///
    /// assert!(scope.declare("x", Value::Number(1.0), false, 1).is_ok());
    /// assert!(scope.declare("x", Value::Number(2.0), false, 2).is_err());
    /// ```
    pub fn declare(&mut self,
                   name: &str,
                   value: Value,
                   constant: bool,
                   line: usize)
                   -> EvalResult<Value> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::VariableRedeclaration { name: name.to_string(),
                                                             line });
        }

        self.variables.insert(name.to_string(), value.clone());
        if constant {
            self.constants.insert(name.to_string());
        }

        Ok(value)
    }

    /// Finds the nearest scope (including `this`) that owns `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] when no scope in the chain
    /// owns the name.
    pub fn resolve(this: &EnvRef, name: &str, line: usize) -> EvalResult<EnvRef> {
        if this.borrow().variables.contains_key(name) {
            return Ok(Rc::clone(this));
        }

        let parent = this.borrow().parent.clone();
        match parent {
            Some(parent) => Self::resolve(&parent, name, line),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Reads the value bound to `name`, searching the scope chain.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] when the name is not
    /// declared anywhere in the chain.
    pub fn lookup(this: &EnvRef, name: &str, line: usize) -> EvalResult<Value> {
        let scope = Self::resolve(this, name, line)?;
        let value = scope.borrow().variables.get(name).cloned();

        value.ok_or(RuntimeError::UnknownVariable { name: name.to_string(),
                                                    line })
    }

    /// Reassigns an existing binding, searching the scope chain.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownVariable`] when the name is not declared
    ///   anywhere in the chain.
    /// - [`RuntimeError::ConstantReassignment`] when the resolved binding was
    ///   declared with `cval`.
    ///
    /// # Example
    /// ```
    /// use ryx::interpreter::{environment::Environment, value::Value};
    ///
    /// let env = Environment::global();
    /// env.borrow_mut().declare("x", Value::Number(1.0), false, 1).unwrap();
    ///
    /// Environment::assign(&env, "x", Value::Number(2.0), 2).unwrap();
    /// assert_eq!(Environment::lookup(&env, "x", 3).unwrap(), Value::Number(2.0));
    ///
    /// // Builtins are constants.
    /// assert!(Environment::assign(&env, "true", Value::Null, 4).is_err());
    /// ```
    pub fn assign(this: &EnvRef, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        let scope = Self::resolve(this, name, line)?;

        if scope.borrow().constants.contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string(),
                                                            line });
        }

        scope.borrow_mut()
             .variables
             .insert(name.to_string(), value.clone());
        Ok(value)
    }
}
