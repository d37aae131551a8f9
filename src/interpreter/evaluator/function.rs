use crate::{
    ast::{Expr, MAX_ARGUMENTS},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a variable by asking the variable resolver.
    ///
    /// The resolver is called on every evaluation. When it reports failure,
    /// lenient mode still returns the value it gave back; strict mode returns
    /// [`RuntimeError::UnresolvedVariable`].
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        let Some(resolver) = self.variables else {
            return self.missing_resolver(name);
        };

        let resolution = resolver.resolve_variable(name);
        if !resolution.resolved {
            if self.is_strict() {
                return Err(RuntimeError::UnresolvedVariable { name:  name.to_owned(),
                                                              value: resolution.value, });
            }
            tracing::debug!(name, value = resolution.value, "variable resolver reported failure");
        }
        Ok(resolution.value)
    }

    /// Evaluates a function call.
    ///
    /// Every argument is evaluated left to right into a fixed buffer of
    /// [`MAX_ARGUMENTS`] values before the function resolver is invoked once
    /// with the filled part of it.
    pub fn eval_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        if arguments.len() > MAX_ARGUMENTS {
            return Err(RuntimeError::TooManyArguments { name:  name.to_owned(),
                                                        count: arguments.len(), });
        }

        let mut values = [0.0; MAX_ARGUMENTS];
        for (slot, argument) in values.iter_mut().zip(arguments) {
            *slot = self.eval(argument)?;
        }
        let values = &values[..arguments.len()];

        let Some(resolver) = self.functions else {
            return self.missing_resolver(name);
        };

        let resolution = resolver.call_function(name, values);
        if !resolution.resolved {
            if self.is_strict() {
                return Err(RuntimeError::FunctionFailed { name:      name.to_owned(),
                                                          arguments: values.to_vec(), });
            }
            tracing::debug!(name,
                            arguments = values.len(),
                            value = resolution.value,
                            "function resolver reported failure");
        }
        Ok(resolution.value)
    }

    /// Handles a variable or call reached without a resolver: an error in
    /// strict mode, `0.0` otherwise.
    fn missing_resolver(&self, name: &str) -> EvalResult<f64> {
        if self.is_strict() {
            return Err(RuntimeError::MissingResolver { name: name.to_owned() });
        }
        tracing::debug!(name, "no resolver registered, evaluating to 0");
        Ok(0.0)
    }
}
