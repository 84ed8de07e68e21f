use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting level of the enclosing group, passed down unchanged.
///
/// # Returns
/// A `Node::BinaryOperation` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind())
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Node::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`. Binds tighter than
/// [`parse_additive`].
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_exponent(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind())
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_exponent(tokens, depth)?;
            left = Node::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Both operands of `^` are factors, and repeated exponentiation folds to the
/// left: `a ^ b ^ c` parses as `(a ^ b) ^ c`, so `2^3^2` is `64`.
///
/// The rule is: `exponent := factor ("^" factor)*`
///
/// # Example
/// ```
/// use calculator::calculate;
///
/// assert_eq!(calculate("2^3^2").unwrap(), 64.0);
/// ```
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens, depth)?;
    while let Some(token) = tokens.peek() {
        if token_to_binary_operator(token.kind()) == Some(BinaryOperator::Pow) {
            tokens.next();
            let right = parse_factor(tokens, depth)?;
            left = Node::binary(BinaryOperator::Pow, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for kinds that never act as a binary operator.
///
/// # Example
/// ```
/// use calculator::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Modulus => Some(BinaryOperator::Mod),
        TokenKind::Power => Some(BinaryOperator::Pow),
        _ => None,
    }
}
