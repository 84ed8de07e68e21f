/// Lexing errors.
///
/// Raised when a character of the input matches none of the token patterns.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence: premature end of input, unexpected tokens, unbalanced
/// parentheses and leftover tokens after a complete expression.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error that can stop a single input on its way through the pipeline.
///
/// Evaluation itself never fails, so only the lexing and parsing stages
/// contribute variants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
