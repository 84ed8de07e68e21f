use crate::ast::Node;

/// Evaluates a syntax tree to a floating-point value.
///
/// Evaluation is a post-order walk: children are evaluated first, then the
/// node's operator is applied. It is total over every tree the parser
/// produces. Out-of-domain operations follow IEEE 754 and yield infinities or
/// NaN instead of failing.
///
/// # Example
/// ```
/// use calculator::{
///     ast::{BinaryOperator, Node},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let node = Node::binary(BinaryOperator::Div, Node::Literal(1.0), Node::Literal(0.0));
/// assert_eq!(evaluate(&node), f64::INFINITY);
/// ```
#[must_use]
pub fn evaluate(node: &Node) -> f64 {
    match node {
        Node::Literal(value) => *value,
        Node::UnaryOperation { op, operand } => op.apply(evaluate(operand)),
        Node::BinaryOperation { op, left, right } => op.apply(evaluate(left), evaluate(right)),
    }
}

impl Node {
    /// Evaluates this tree. See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        evaluate(self)
    }
}
