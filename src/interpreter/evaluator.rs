/// Unary operator evaluation logic.
///
/// Implements negation and the built-in functions.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic operators, including floating-point remainder
/// and exponentiation.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the post-order walk over the syntax tree.
pub mod core;
