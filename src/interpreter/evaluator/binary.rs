use crate::{
    ast::{BinaryOperator, ComparisonOperator},
    interpreter::evaluator::core::Context,
    util::num::{bool_to_f64, truncate_to_int},
};

impl Context<'_> {
    /// Applies an arithmetic or shift operator to two evaluated operands.
    ///
    /// `<<` and `>>` truncate both operands to 32-bit integers first; the
    /// shift amount wraps modulo 32. `+ - * /` work on the floats directly, so
    /// division by zero yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use expsolver::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::ShiftLeft, 1.9, 4.2), 16.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 4.0), 0.25);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::ShiftLeft => {
                let shifted = truncate_to_int(left).wrapping_shl(truncate_to_int(right) as u32);
                f64::from(shifted)
            },
            BinaryOperator::ShiftRight => {
                let shifted = truncate_to_int(left).wrapping_shr(truncate_to_int(right) as u32);
                f64::from(shifted)
            },
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }

    /// Applies a comparison operator, returning `1.0` or `0.0`.
    ///
    /// `>` and `<` compare the left float against the right operand truncated
    /// to an integer. `=` and `!` truncate both sides.
    ///
    /// # Example
    /// ```
    /// use expsolver::{ast::ComparisonOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_comparison(ComparisonOperator::Greater, 4.0, 1.0), 1.0);
    /// // The right side is truncated: 1.5 > 1
    /// assert_eq!(Context::eval_comparison(ComparisonOperator::Greater, 1.5, 1.9), 1.0);
    /// assert_eq!(Context::eval_comparison(ComparisonOperator::Equal, 2.7, 2.1), 1.0);
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: f64, right: f64) -> f64 {
        let result = match op {
            ComparisonOperator::Greater => left > f64::from(truncate_to_int(right)),
            ComparisonOperator::Less => left < f64::from(truncate_to_int(right)),
            ComparisonOperator::Equal => truncate_to_int(left) == truncate_to_int(right),
            ComparisonOperator::NotEqual => truncate_to_int(left) != truncate_to_int(right),
        };
        bool_to_f64(result)
    }
}
