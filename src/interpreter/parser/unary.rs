use std::{f64::consts, iter::Peekable};

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult, parse_expression},
    },
};

/// The golden ratio, as resolved for the `phi` constant.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Parses a factor, the tightest-binding level of the grammar.
///
/// Prefix constructs recurse into [`parse_factor`] itself, so `-sqrt4` is
/// `Negate(Sqrt(4))` and `sqrt4^2` is `Power(Sqrt(4), 2)`. A leading `+` is
/// dropped without creating a node.
///
/// Grammar:
/// ```text
///     factor := FUNCTION factor
///             | "+" factor
///             | "-" factor
///             | "(" expression ")"
///             | NUMBER
///             | CONSTANT
/// ```
/// Every prefix and every group adds one level of nesting; past
/// [`MAX_NESTING`] levels parsing stops with an error instead of recursing
/// further.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `depth`: Current nesting level.
///
/// # Returns
/// The parsed [`Node`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the input ends before a factor is complete,
/// - the next token cannot start a factor,
/// - a group is not closed by `)`,
/// - nesting goes deeper than [`MAX_NESTING`].
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
    }

    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind() {
        TokenKind::Function => parse_function(token, tokens, depth + 1),
        TokenKind::Plus => parse_factor(tokens, depth + 1),
        TokenKind::Minus => {
            Ok(Node::unary(UnaryOperator::Negate, parse_factor(tokens, depth + 1)?))
        },
        TokenKind::LeftParen => parse_grouping(tokens, depth + 1),
        TokenKind::Number => parse_number(token),
        TokenKind::Constant => parse_constant(token),
        _ => Err(ParseError::UnexpectedToken { token: token.clone() }),
    }
}

/// Parses a function application such as `sin x` or `sqrt(2)`.
///
/// The function name has already been consumed; its argument is the next
/// factor, so no parentheses are required.
fn parse_function<'a, I>(name: &Token,
                         tokens: &mut Peekable<I>,
                         depth: usize)
                         -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let op = UnaryOperator::from_function_name(name.text())
        .ok_or_else(|| ParseError::UnknownFunction { name: name.text().to_string() })?;
    let argument = parse_factor(tokens, depth)?;
    Ok(Node::unary(op, argument))
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some(token) if token.kind() == TokenKind::RightParen => Ok(expr),
        Some(token) => Err(ParseError::ExpectedClosingParen { found: token.clone() }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a number literal with `.` as the decimal separator.
fn parse_number(token: &Token) -> ParseResult<Node> {
    token.text()
         .parse::<f64>()
         .map(Node::Literal)
         .map_err(|_| ParseError::InvalidNumber { text: token.text().to_string() })
}

/// Resolves a named constant to its value.
fn parse_constant(token: &Token) -> ParseResult<Node> {
    constant_value(token.text())
        .map(Node::Literal)
        .ok_or_else(|| ParseError::UnknownConstant { name: token.text().to_string() })
}

/// Looks up the value of a (case-insensitive) constant name.
///
/// # Example
/// ```
/// use calculator::interpreter::parser::unary::constant_value;
///
/// assert_eq!(constant_value("PI"), Some(std::f64::consts::PI));
/// assert_eq!(constant_value("tau"), Some(std::f64::consts::TAU));
/// assert_eq!(constant_value("x"), None);
/// ```
#[must_use]
pub fn constant_value(name: &str) -> Option<f64> {
    match name.to_ascii_lowercase().as_str() {
        "e" => Some(consts::E),
        "pi" => Some(consts::PI),
        "phi" => Some(PHI),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}
