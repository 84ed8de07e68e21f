use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Reached the end of input while a grammar rule still needed a token.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// Found a token that cannot start or continue the current rule.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// A closing parenthesis `)` was expected but another token was found.
    #[error("Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// The token found instead.
        found: Token,
    },
    /// Tokens remained after a complete expression was parsed.
    #[error("Unexpected tokens: {}.", join_tokens(tokens))]
    UnexpectedTrailingTokens {
        /// Every unconsumed token, in order.
        tokens: Vec<Token>,
    },
    /// Groups, signs or function applications were nested too deeply.
    #[error("Expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// The input has more tokens than the parser accepts.
    #[error("Expression is too long: {tokens} tokens, at most {limit} are allowed.")]
    InputTooLong {
        /// Number of tokens in the input.
        tokens: usize,
        /// The longest token sequence accepted.
        limit:  usize,
    },
    /// A number token could not be converted to a floating-point value.
    #[error("Invalid number literal: {text}.")]
    InvalidNumber {
        /// The literal text of the token.
        text: String,
    },
    /// A constant token named no known constant.
    #[error("Invalid constant: {name}.")]
    UnknownConstant {
        /// The constant name as written.
        name: String,
    },
    /// A function token named no known function.
    #[error("Invalid function: {name}.")]
    UnknownFunction {
        /// The function name as written.
        name: String,
    },
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(", ")
}
