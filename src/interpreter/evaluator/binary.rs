use crate::ast::BinaryOperator;

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// `Mod` is the floating-point remainder, which takes the sign of the
    /// dividend. Division and remainder by zero produce infinities or NaN.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.apply(7.5, 2.0), 1.5);
    /// assert_eq!(BinaryOperator::Mod.apply(-7.0, 3.0), -1.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Mod.apply(1.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
            Self::Pow => left.powf(right),
        }
    }
}
