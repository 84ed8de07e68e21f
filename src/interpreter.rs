/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST post-order and applies each node's operator to
/// its already evaluated children. Evaluation never fails: out-of-domain
/// arithmetic follows IEEE 754 semantics.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Keeps operator application next to the operator enums.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer removes whitespace and scans the remaining text with an ordered
/// table of token patterns, producing numbers, constants, operators,
/// parentheses and function names. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Preserves the literal text of every token.
/// - Reports the first character that matches no pattern.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one procedure per
/// precedence level and a single token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees encoding precedence and
///   associativity.
/// - Resolves number literals, named constants and function names.
/// - Rejects incomplete input and leftover tokens.
pub mod parser;
