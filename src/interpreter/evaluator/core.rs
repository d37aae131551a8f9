use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::resolver::{FunctionResolver, VariableResolver},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How evaluation treats a resolver that reports failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Use whatever value the resolver returned and carry on.
    #[default]
    Lenient,
    /// Stop with a [`RuntimeError`] as soon as a resolver reports failure.
    Strict,
}

/// Stores the runtime evaluation context.
///
/// Holds the resolvers variables and calls are handed to, and the
/// strictness policy for resolver failures. A context only borrows its
/// resolvers; it is cheap to build per evaluation.
///
/// ## Usage
///
/// ```
/// use expsolver::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::Context, resolver::Resolution},
/// };
///
/// let variables = |name: &str| {
///     if name == "t" { Resolution::found(4.0) } else { Resolution::missing() }
/// };
/// let context = Context::new().with_variables(&variables);
///
/// let tree = Expr::binary(BinaryOperator::Add, Expr::variable("t"), Expr::Constant(1.0));
/// assert_eq!(context.eval(&tree).unwrap(), 5.0);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Context<'r> {
    /// Answers [`Expr::Variable`] nodes.
    pub variables:  Option<&'r dyn VariableResolver>,
    /// Answers [`Expr::Call`] nodes.
    pub functions:  Option<&'r dyn FunctionResolver>,
    /// What to do when a resolver reports failure.
    pub strictness: Strictness,
}

impl<'r> Context<'r> {
    /// Creates a lenient context with no resolvers.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables:  None,
               functions:  None,
               strictness: Strictness::Lenient, }
    }

    /// Sets the variable resolver.
    #[must_use]
    pub const fn with_variables(mut self, resolver: &'r dyn VariableResolver) -> Self {
        self.variables = Some(resolver);
        self
    }

    /// Sets the function resolver.
    #[must_use]
    pub const fn with_functions(mut self, resolver: &'r dyn FunctionResolver) -> Self {
        self.functions = Some(resolver);
        self
    }

    /// Sets the strictness policy.
    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Returns `true` when resolver failures must stop evaluation.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.strictness, Strictness::Strict)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Operands are evaluated
    /// left before right, call arguments left to right, and only the selected
    /// branch of a conditional is evaluated at all.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. In lenient mode the only possible error is
    /// a hand-built call with more than [`crate::ast::MAX_ARGUMENTS`]
    /// arguments.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::Comparison { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_comparison(*op, left, right))
            },
            Expr::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                self.eval_conditional(condition, then_branch, else_branch)
            },
        }
    }

    /// Evaluates `condition ? then_branch : else_branch`.
    ///
    /// A strictly positive condition selects `then_branch`; zero, negative
    /// and NaN select `else_branch`.
    pub fn eval_conditional(&self,
                            condition: &Expr,
                            then_branch: &Expr,
                            else_branch: &Expr)
                            -> EvalResult<f64> {
        if self.eval(condition)? > 0.0 {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}
