/// Core parsing entry points.
///
/// Holds the top-level [`core::parse`] function, which requires the whole
/// token sequence to form exactly one expression, and the lowest-precedence
/// rule it starts from.
pub mod core;

/// Binary operator parsing.
///
/// One procedure per precedence level: addition and subtraction,
/// multiplication, division and modulus, and exponentiation.
pub mod binary;

/// Factor parsing.
///
/// Handles everything that binds tighter than any binary operator: function
/// application, prefix signs, parenthesized groups, numbers and constants.
pub mod unary;
