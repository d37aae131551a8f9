use std::collections::HashMap;

/// What a resolver answered: a value, and whether it really knew the answer.
///
/// The `resolved` flag is advisory. Lenient evaluation uses `value` either
/// way; strict evaluation turns `resolved == false` into an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The resolved value, or a fallback when `resolved` is `false`.
    pub value:    f64,
    /// Whether the resolver recognized the name.
    pub resolved: bool,
}

impl Resolution {
    /// A successful resolution.
    #[must_use]
    pub const fn found(value: f64) -> Self {
        Self { value,
               resolved: true }
    }

    /// An unknown name, falling back to `0.0`.
    #[must_use]
    pub const fn missing() -> Self {
        Self::failed(0.0)
    }

    /// A failed resolution that still carries a value.
    #[must_use]
    pub const fn failed(value: f64) -> Self {
        Self { value,
               resolved: false }
    }
}

impl From<Option<f64>> for Resolution {
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(Self::missing, Self::found)
    }
}

/// Looks up the value of a variable by name.
///
/// Called afresh on every evaluation; values are never cached.
pub trait VariableResolver {
    /// Resolves `name` to a value.
    fn resolve_variable(&self, name: &str) -> Resolution;
}

/// Invokes a function by name with already evaluated arguments.
pub trait FunctionResolver {
    /// Calls `name` with `arguments`, in source order.
    fn call_function(&self, name: &str, arguments: &[f64]) -> Resolution;
}

impl<F> VariableResolver for F where F: Fn(&str) -> Resolution
{
    fn resolve_variable(&self, name: &str) -> Resolution {
        self(name)
    }
}

impl<F> FunctionResolver for F where F: Fn(&str, &[f64]) -> Resolution
{
    fn call_function(&self, name: &str, arguments: &[f64]) -> Resolution {
        self(name, arguments)
    }
}

/// A fixed table of variables.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use expsolver::interpreter::resolver::{Resolution, VariableResolver};
///
/// let table = HashMap::from([("t".to_string(), 4.0)]);
/// assert_eq!(table.resolve_variable("t"), Resolution::found(4.0));
/// assert_eq!(table.resolve_variable("u"), Resolution::missing());
/// ```
impl<S: std::hash::BuildHasher> VariableResolver for HashMap<String, f64, S> {
    fn resolve_variable(&self, name: &str) -> Resolution {
        self.get(name).copied().into()
    }
}
