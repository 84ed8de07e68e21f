use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of groups, prefix signs and function applications the
/// parser will descend into.
pub const MAX_NESTING: usize = 256;

/// Longest token sequence the parser accepts. Operator chains fold into
/// trees as deep as they are long, and evaluating or dropping a tree
/// recurses once per level.
pub const MAX_TOKENS: usize = 10_000;

/// Parses a token sequence into a syntax tree.
///
/// Parsing succeeds only when the entire sequence is consumed by exactly one
/// top-level expression.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the tokens run out before a rule
///   is complete (including empty input).
/// - [`ParseError::UnexpectedToken`] or [`ParseError::ExpectedClosingParen`]
///   if a token appears where the grammar does not allow it.
/// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain after a
///   complete expression.
/// - [`ParseError::InputTooLong`] or [`ParseError::NestingTooDeep`] if the
///   input exceeds [`MAX_TOKENS`] or [`MAX_NESTING`].
///
/// # Example
/// ```
/// use calculator::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let node = parse(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(node.evaluate(), 14.0);
///
/// assert!(parse(&tokenize("2 +").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::InputTooLong { tokens: tokens.len(),
                                              limit:  MAX_TOKENS, });
    }

    let mut iter = tokens.iter().peekable();
    let node = parse_expression(&mut iter, 0)?;

    let trailing: Vec<Token> = iter.cloned().collect();
    if !trailing.is_empty() {
        return Err(ParseError::UnexpectedTrailingTokens { tokens: trailing });
    }

    tracing::debug!(tokens = tokens.len(), "parsed expression");
    Ok(node)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy. Parenthesized
/// groups re-enter here, one `depth` level deeper.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, depth)
}
