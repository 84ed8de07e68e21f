use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Each kind corresponds to exactly one entry of the ordered pattern table
/// used by [`tokenize`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal such as `3`, `3.14`, `.5`, `2e10` or `2.5e-3`.
    Number,
    /// Named constant: `e`, `pi`, `phi` or `tau` (any casing).
    Constant,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Modulus,
    /// `^`
    Power,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Function name: `sin`, `cos`, `tan` or `sqrt` (any casing).
    Function,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Represents a lexical token in the source input.
///
/// A token pairs its [`TokenKind`] with the exact slice of source text it was
/// matched from. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of the given kind from its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text this token was matched from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}

/// Token patterns, tried in declaration order at every position.
///
/// The first pattern that matches wins, even when a later one would match a
/// longer slice. `Number` must stay ahead of `Constant` so that the exponent
/// marker in `2e10` is not taken for Euler's number.
const PATTERNS: &[(TokenKind, &str)] =
    &[(TokenKind::Number, r"[0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?"),
      (TokenKind::Constant, r"(?i-u:e|pi|phi|tau)"),
      (TokenKind::Plus, r"\+"),
      (TokenKind::Minus, r"-"),
      (TokenKind::Star, r"\*"),
      (TokenKind::Slash, r"/"),
      (TokenKind::Modulus, r"%"),
      (TokenKind::Power, r"\^"),
      (TokenKind::LeftParen, r"\("),
      (TokenKind::RightParen, r"\)"),
      (TokenKind::Function, r"(?i-u:sin|cos|tan|sqrt)")];

/// The pattern table compiled once, each regex anchored at the start of the
/// remaining input.
static COMPILED_PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    PATTERNS.iter()
            .map(|(kind, pattern)| {
                let anchored = format!("^(?:{pattern})");
                (*kind, Regex::new(&anchored).expect("token patterns are valid regexes"))
            })
            .collect()
});

/// Converts source text into an ordered sequence of tokens.
///
/// All whitespace is removed first. The remaining text is scanned left to
/// right; at each position the patterns are tried in a fixed order and the
/// first one matching exactly at that position produces the next token.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] naming the first character at which
/// no pattern matches, together with its index in the whitespace-stripped
/// input.
///
/// # Example
/// ```
/// use calculator::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("2 * pi").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Star, TokenKind::Constant]);
///
/// assert!(tokenize("2 & 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let source: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut position = 0;

    while position < source.len() {
        let rest = &source[position..];
        let Some((kind, matched)) = match_token(rest) else {
            let character = rest.chars().next().unwrap_or_default();
            return Err(LexError::InvalidCharacter { character,
                                                    position: source[..position].chars()
                                                                                .count() });
        };

        tracing::trace!(?kind, text = matched, position, "token");
        tokens.push(Token::new(kind, matched));
        position += matched.len();
    }

    tracing::debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Finds the first pattern matching at the start of `rest`.
///
/// Every pattern consumes at least one character, so a match always advances
/// the scan.
fn match_token(rest: &str) -> Option<(TokenKind, &str)> {
    COMPILED_PATTERNS.iter()
                     .find_map(|(kind, regex)| regex.find(rest).map(|m| (*kind, m.as_str())))
}
