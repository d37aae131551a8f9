use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, EvalResult, Strictness},
        lexer::{DEFAULT_OPERATORS, Tokenizer},
        parser::{core::Bindings, statement::parse_statements},
        resolver::{FunctionResolver, VariableResolver},
    },
};

/// A source expression together with its resolvers and prepared tree.
///
/// The text is tokenized once, at construction. [`Expression::prepare`]
/// builds the trees, [`Expression::evaluate`] computes the value of the first
/// one. Resolvers are borrowed and must outlive the expression.
///
/// # Example
/// ```
/// use expsolver::{expression::Expression, interpreter::resolver::Resolution};
///
/// let sum = |_name: &str, arguments: &[f64]| Resolution::found(arguments.iter().sum());
///
/// let mut expression = Expression::new("inc(2+1, 2, inc(3+1), 5)*3");
/// expression.register_function_resolver(&sum);
/// assert!(expression.prepare());
/// assert_eq!(expression.evaluate(), 42.0);
/// ```
pub struct Expression<'r> {
    tokens:     Tokenizer,
    variables:  Option<&'r dyn VariableResolver>,
    functions:  Option<&'r dyn FunctionResolver>,
    statements: Vec<Expr>,
    last_error: Option<ParseError>,
}

impl<'r> Expression<'r> {
    /// Tokenizes `source` with the default operator vocabulary.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { tokens:     Tokenizer::new(source, DEFAULT_OPERATORS),
               variables:  None,
               functions:  None,
               statements: Vec::new(),
               last_error: None, }
    }

    /// Registers the resolver for variables, replacing any previous one.
    pub fn register_variable_resolver(&mut self, resolver: &'r dyn VariableResolver) {
        self.variables = Some(resolver);
    }

    /// Registers the resolver for function calls, replacing any previous one.
    pub fn register_function_resolver(&mut self, resolver: &'r dyn FunctionResolver) {
        self.functions = Some(resolver);
    }

    /// Builds the expression trees, returning `false` on any parse error.
    ///
    /// The diagnostic for a failure is available from
    /// [`Expression::last_error`].
    pub fn prepare(&mut self) -> bool {
        self.try_prepare().is_ok()
    }

    /// Builds the expression trees.
    ///
    /// Any previously prepared trees are discarded first, and the tokenizer is
    /// rewound, so preparing twice gives the same result. On failure no tree is
    /// retained.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn try_prepare(&mut self) -> Result<(), ParseError> {
        self.statements.clear();
        self.last_error = None;
        while self.tokens.previous().is_some() {}

        let bindings = self.bindings();
        match parse_statements(&mut self.tokens, bindings) {
            Ok(statements) => {
                self.statements = statements;
                Ok(())
            },
            Err(error) => {
                tracing::warn!(position = error.position(), %error, "expression preparation failed");
                self.last_error = Some(error.clone());
                Err(error)
            },
        }
    }

    /// Evaluates the first prepared tree, or returns `0.0` when nothing is
    /// prepared.
    ///
    /// Resolver failures are ignored: the value the resolver returned is used.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let Some(tree) = self.tree() else {
            return 0.0;
        };
        self.context(Strictness::Lenient).eval(tree).unwrap_or_else(|error| {
                                                       tracing::warn!(%error, "evaluation failed");
                                                       0.0
                                                   })
    }

    /// Evaluates the first prepared tree, stopping at the first resolver
    /// failure.
    ///
    /// # Errors
    /// - [`RuntimeError::NotPrepared`] when nothing is prepared.
    /// - Any resolver failure, see [`Strictness::Strict`].
    pub fn evaluate_strict(&self) -> EvalResult<f64> {
        let tree = self.tree().ok_or(RuntimeError::NotPrepared)?;
        self.context(Strictness::Strict).eval(tree)
    }

    /// The tree `evaluate` works on: the first top-level expression.
    #[must_use]
    pub fn tree(&self) -> Option<&Expr> {
        self.statements.first()
    }

    /// Every parsed top-level expression, in source order.
    #[must_use]
    pub fn statements(&self) -> &[Expr] {
        &self.statements
    }

    /// The diagnostic of the most recent failed preparation.
    #[must_use]
    pub const fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// The tokenizer holding the source tokens.
    #[must_use]
    pub const fn tokens(&self) -> &Tokenizer {
        &self.tokens
    }

    const fn bindings(&self) -> Bindings {
        Bindings { variables: self.variables.is_some(),
                   functions: self.functions.is_some(), }
    }

    fn context(&self, strictness: Strictness) -> Context<'r> {
        let mut context = Context::new().with_strictness(strictness);
        context.variables = self.variables;
        context.functions = self.functions;
        context
    }
}
