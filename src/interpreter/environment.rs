use std::collections::HashMap;

/// The flat store of variable bindings for one program run.
///
/// Names are unique keys; declaring a name again overwrites the earlier value.
/// There is a single scope, with no nesting or shadowing. A fresh environment
/// is created for every run and handed to the evaluator explicitly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i64>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use dartish::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.set("x", 1);
    /// env.set("x", 2);
    ///
    /// assert_eq!(env.get("x"), Some(2));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, or `None` if it was never set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
