use std::fmt;

/// Largest number of arguments a single function call may carry.
pub const MAX_ARGUMENTS: usize = 32;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every non-leaf variant exclusively owns its children, so the tree has no
/// sharing and no cycles. Nodes are created by the parser and never mutated
/// afterwards; evaluation only reads them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A decoded numeric literal, e.g. `42`, `$ff`, `%101` or `-4`.
    Constant(f64),
    /// A name handed to the variable resolver on every evaluation.
    Variable {
        /// The raw token text.
        name: String,
    },
    /// A call handed to the function resolver, e.g. `inc(1, 2)`.
    Call {
        /// The function name.
        name:      String,
        /// The argument trees, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// An arithmetic or shift operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A comparison that yields `1.0` or `0.0`.
    Comparison {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `condition ? then_branch : else_branch`.
    Conditional {
        /// Selects the branch; strictly positive means true.
        condition:   Box<Self>,
        /// Evaluated when the condition is strictly positive.
        then_branch: Box<Self>,
        /// Evaluated otherwise.
        else_branch: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Binary`] node from two operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a [`Expr::Comparison`] node from two operands.
    #[must_use]
    pub fn comparison(op: ComparisonOperator, left: Self, right: Self) -> Self {
        Self::Comparison { op,
                           left: Box::new(left),
                           right: Box::new(right) }
    }

    /// Builds a [`Expr::Conditional`] node.
    #[must_use]
    pub fn conditional(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::Conditional { condition:   Box::new(condition),
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch), }
    }

    /// Builds a [`Expr::Variable`] node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a [`Expr::Call`] node.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     arguments }
    }

    /// Counts the nodes in this tree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Constant(_) | Self::Variable { .. } => 0,
            Self::Call { arguments, .. } => arguments.iter().map(Self::node_count).sum(),
            Self::Binary { left, right, .. } | Self::Comparison { left, right, .. } => {
                left.node_count() + right.node_count()
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                condition.node_count() + then_branch.node_count() + else_branch.node_count()
            },
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Comparison { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "({condition} ? {then_branch} : {else_branch})")
            },
        }
    }
}

/// Arithmetic and shift operators.
///
/// Shifts operate on operands truncated to integers; the rest operate on the
/// floating-point values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Every operator, in the order its symbols are matched.
    pub const ALL: [Self; 6] = [Self::ShiftLeft,
                                Self::ShiftRight,
                                Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div];

    /// Maps a token to its operator.
    ///
    /// # Example
    /// ```
    /// use expsolver::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<<"), Some(BinaryOperator::ShiftLeft));
    /// assert_eq!(BinaryOperator::from_symbol("<"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The source symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns `true` for `<<` and `>>`.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operators. Every comparison evaluates to exactly `1.0` or
/// `0.0`.
///
/// The grammar only produces `>` and `<`; `=` and `!` are kept for trees
/// built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
    /// `!`
    NotEqual,
}

impl ComparisonOperator {
    /// Every operator.
    pub const ALL: [Self; 4] = [Self::Greater, Self::Less, Self::Equal, Self::NotEqual];

    /// Maps a token to its operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The source symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
            Self::NotEqual => "!",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
