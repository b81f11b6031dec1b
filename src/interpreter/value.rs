/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can produce. Values carry no
/// reference back to the environment that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An object value: properties in insertion order.
    Object(Vec<(String, Self)>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<(String, Self)>> for Value {
    fn from(properties: Vec<(String, Self)>) -> Self {
        Self::Object(properties)
    }
}

impl Value {
    /// Returns the numeric payload when the value is a [`Value::Number`].
    ///
    /// # Example
    /// ```
    /// use ryx::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up a property of an object value by key.
    ///
    /// Returns `None` for non-objects and for missing keys.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(properties) => {
                properties.iter()
                          .find(|(name, _)| name == key)
                          .map(|(_, value)| value)
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Object(properties) => {
                write!(f, "{{ ")?;

                for (index, (key, value)) in properties.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, " }}")
            },
        }
    }
}
