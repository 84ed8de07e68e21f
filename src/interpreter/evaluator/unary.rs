use crate::ast::UnaryOperator;

impl UnaryOperator {
    /// Applies the operator to an already evaluated operand.
    ///
    /// Trigonometric functions take radians. `Sqrt` of a negative number is
    /// NaN.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.apply(5.0), -5.0);
    /// assert_eq!(UnaryOperator::Sqrt.apply(9.0), 3.0);
    /// assert!(UnaryOperator::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Sqrt => value.sqrt(),
        }
    }
}
