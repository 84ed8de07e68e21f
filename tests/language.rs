use std::f64::consts::{E, PI, TAU};

use calculator::{
    ast::{BinaryOperator, Node, UnaryOperator},
    calculate,
    error::{Error, LexError, ParseError},
    format_number,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{
            core::{MAX_NESTING, MAX_TOKENS, parse},
            unary::PHI,
        },
    },
};
use rstest::rstest;

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!(value == expected || (value - expected).abs() < 1e-12,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match calculate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("{src} should fail to parse, got {other:?}"),
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap().iter().map(Token::kind).collect()
}

#[rstest]
#[case("2+3*4", 14.0)]
#[case("(2+3)*4", 20.0)]
#[case("1 - 2 - 3", -4.0)]
#[case("8 / 4 / 2", 1.0)]
#[case("10 % 4", 2.0)]
#[case("7.5 % 2", 1.5)]
#[case("-7 % 3", -1.0)]
#[case("2 * 3 % 4", 2.0)]
#[case("2 + 3 ^ 2", 11.0)]
#[case("((((1))))", 1.0)]
fn precedence_and_left_associativity(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[test]
fn chained_power_folds_left() {
    assert_value("2^3^2", 64.0);
    assert_value("2^(3^2)", 512.0);
}

#[rstest]
#[case("-2^2", 4.0)]
#[case("2^-1", 0.5)]
#[case("--3", 3.0)]
#[case("+5", 5.0)]
#[case("-+-1", 1.0)]
#[case("3 * -2", -6.0)]
#[case("4 - -4", 8.0)]
fn prefix_signs_bind_to_the_next_factor(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("sqrt4", 2.0)]
#[case("sqrt 4 ^ 2", 4.0)]
#[case("SQRT(16)", 4.0)]
#[case("sin0", 0.0)]
#[case("cos 0", 1.0)]
#[case("tan(0)", 0.0)]
#[case("-sqrt9", -3.0)]
#[case("sqrt sqrt 16", 2.0)]
#[case("cos(pi)", -1.0)]
fn functions_apply_to_a_single_factor(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("pi", PI)]
#[case("-pi", -PI)]
#[case("tau", TAU)]
#[case("e", E)]
#[case("E", E)]
#[case("Pi", PI)]
#[case("phi", PHI)]
#[case("2 * pi", TAU)]
fn constants_resolve_to_fixed_values(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[test]
fn tau_is_two_pi() {
    assert_eq!(calculate("tau").unwrap(), 2.0 * PI);
    assert_eq!(calculate("-pi").unwrap(), -PI);
}

#[rstest]
#[case("3", 3.0)]
#[case("3.14", 3.14)]
#[case(".5", 0.5)]
#[case("2e10", 2e10)]
#[case("2.5e-3", 2.5e-3)]
#[case("1E+2", 100.0)]
#[case("007", 7.0)]
fn number_literals(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(calculate(src).unwrap(), expected);
}

#[test]
fn out_of_domain_math_is_not_an_error() {
    assert_eq!(calculate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(calculate("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(calculate("0/0").unwrap().is_nan());
    assert!(calculate("sqrt(-1)").unwrap().is_nan());
    assert!(calculate("5 % 0").unwrap().is_nan());
    assert_eq!(calculate("1e999").unwrap(), f64::INFINITY);
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value("  2 \t+\n3 ", 5.0);
    assert_value("s q r t 4", 2.0);
    assert_value("2 . 5", 2.5);
}

#[test]
fn lexer_tries_number_before_constant() {
    assert_eq!(kinds("2e10"), [TokenKind::Number]);
    assert_eq!(kinds("2E5"), [TokenKind::Number]);
    assert_eq!(kinds("2e"), [TokenKind::Number, TokenKind::Constant]);
    assert_eq!(kinds("e5"), [TokenKind::Constant, TokenKind::Number]);
    assert_eq!(kinds("2e+"), [TokenKind::Number, TokenKind::Constant, TokenKind::Plus]);
}

#[test]
fn lexer_keeps_source_text() {
    let tokens = tokenize("SqRt(PI)*2.50").unwrap();
    assert_eq!(tokens,
               [Token::new(TokenKind::Function, "SqRt"),
                Token::new(TokenKind::LeftParen, "("),
                Token::new(TokenKind::Constant, "PI"),
                Token::new(TokenKind::RightParen, ")"),
                Token::new(TokenKind::Star, "*"),
                Token::new(TokenKind::Number, "2.50")]);
}

#[test]
fn lexer_recognizes_every_kind() {
    assert_eq!(kinds("1pi+-*/%^()cos"),
               [TokenKind::Number,
                TokenKind::Constant,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Modulus,
                TokenKind::Power,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Function]);
}

#[test]
fn lexer_splits_adjacent_numbers() {
    let tokens = tokenize("1.2.3").unwrap();
    let texts: Vec<_> = tokens.iter().map(Token::text).collect();
    assert_eq!(texts, ["1.2", ".3"]);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t ").unwrap().is_empty());
}

#[rstest]
#[case("2&3", '&', 1)]
#[case("2 + & 3", '&', 2)]
#[case("3.", '.', 1)]
#[case("x", 'x', 0)]
#[case("exp(1)", 'x', 1)]
#[case("2 = 2", '=', 1)]
fn unsupported_characters_are_lex_errors(#[case] src: &str,
                                         #[case] character: char,
                                         #[case] position: usize) {
    assert_eq!(calculate(src),
               Err(Error::Lex(LexError::InvalidCharacter { character, position })));
}

#[test]
fn lex_error_names_the_character() {
    let message = calculate("2&3").unwrap_err().to_string();
    assert!(message.contains('&'), "{message}");
}

#[rstest]
#[case("2+")]
#[case("")]
#[case("(2+3")]
#[case("-")]
#[case("sqrt")]
#[case("2^")]
fn premature_end_of_input(#[case] src: &str) {
    assert_eq!(parse_error(src), ParseError::UnexpectedEndOfInput);
}

#[test]
fn trailing_tokens_are_reported() {
    assert_eq!(parse_error("2+3)"),
               ParseError::UnexpectedTrailingTokens { tokens: vec![Token::new(TokenKind::RightParen,
                                                                              ")")] });
    assert_eq!(parse_error("2pi3"),
               ParseError::UnexpectedTrailingTokens { tokens: vec![Token::new(TokenKind::Constant,
                                                                              "pi"),
                                                                   Token::new(TokenKind::Number,
                                                                              "3")] });

    let tokens = [Token::new(TokenKind::Number, "2"),
                  Token::new(TokenKind::Number, "3"),
                  Token::new(TokenKind::Number, "4")];
    assert_eq!(parse(&tokens),
               Err(ParseError::UnexpectedTrailingTokens { tokens: tokens[1..].to_vec() }));
    assert!(matches!(parse_error("2pi"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_error("2e"), ParseError::UnexpectedTrailingTokens { .. }));

    let message = parse_error("2+3)").to_string();
    assert!(message.contains(')'), "{message}");
}

#[test]
fn unexpected_tokens_are_reported() {
    assert_eq!(parse_error("*2"),
               ParseError::UnexpectedToken { token: Token::new(TokenKind::Star, "*") });
    assert_eq!(parse_error("2*/3"),
               ParseError::UnexpectedToken { token: Token::new(TokenKind::Slash, "/") });
    assert_eq!(parse_error("()"),
               ParseError::UnexpectedToken { token: Token::new(TokenKind::RightParen, ")") });
    assert_eq!(parse_error("(2pi)"),
               ParseError::ExpectedClosingParen { found: Token::new(TokenKind::Constant, "pi") });
}

#[test]
fn whitespace_does_not_separate_operands() {
    assert_value("2 3 4", 234.0);
    assert_value("(2 3)", 23.0);
}

#[test]
fn deep_nesting_is_rejected_without_recursing_further() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING), 1.0);
    assert_eq!(parse_error(&nested(MAX_NESTING + 1)),
               ParseError::NestingTooDeep { limit: MAX_NESTING });
    assert_eq!(parse_error(&format!("{}1", "-".repeat(300))),
               ParseError::NestingTooDeep { limit: MAX_NESTING });
    assert_eq!(parse_error(&format!("{}1", "sqrt".repeat(300))),
               ParseError::NestingTooDeep { limit: MAX_NESTING });
}

#[test]
fn overlong_input_is_rejected() {
    let source = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(parse_error(&source),
               ParseError::InputTooLong { tokens: 400_001,
                                          limit:  MAX_TOKENS, });

    let sum = vec!["1"; 5_000].join("+");
    assert_value(&sum, 5_000.0);
}

#[test]
fn parser_builds_the_expected_tree() {
    let tree = parse(&tokenize("1 + 2 * -3").unwrap()).unwrap();
    assert_eq!(tree,
               Node::binary(BinaryOperator::Add,
                            Node::Literal(1.0),
                            Node::binary(BinaryOperator::Mul,
                                         Node::Literal(2.0),
                                         Node::unary(UnaryOperator::Negate, Node::Literal(3.0)))));
}

#[test]
fn parser_rejects_hand_built_unknown_names() {
    let tokens = [Token::new(TokenKind::Function, "log"), Token::new(TokenKind::Number, "1")];
    assert_eq!(parse(&tokens),
               Err(ParseError::UnknownFunction { name: "log".to_string() }));

    let tokens = [Token::new(TokenKind::Constant, "c")];
    assert_eq!(parse(&tokens), Err(ParseError::UnknownConstant { name: "c".to_string() }));

    let tokens = [Token::new(TokenKind::Number, "1..2")];
    assert_eq!(parse(&tokens), Err(ParseError::InvalidNumber { text: "1..2".to_string() }));
}

#[test]
fn render_binary_operation() {
    let node = Node::binary(BinaryOperator::Add, Node::Literal(1.0), Node::Literal(2.0));
    assert_eq!(node.render(), "Addition\n+- 1\n+- 2");
    assert_eq!(node.to_string(), node.render());
}

#[test]
fn render_nested_tree() {
    let tree = parse(&tokenize("1*2+3").unwrap()).unwrap();
    assert_eq!(tree.render(),
               "Addition\n\
                +- Multiplication\n\
                |  +- 1\n\
                |  +- 2\n\
                +- 3");

    let tree = parse(&tokenize("-sqrt4").unwrap()).unwrap();
    assert_eq!(tree.render(), "Negate\n+- Sqrt\n   +- 4");

    let tree = parse(&tokenize("2^3^2").unwrap()).unwrap();
    assert_eq!(tree.render(),
               "Power\n\
                +- Power\n\
                |  +- 2\n\
                |  +- 3\n\
                +- 2");
}

#[test]
fn render_does_not_change_the_result() {
    let tree = parse(&tokenize("(1.5 + 2) % 2 - cos 0").unwrap()).unwrap();
    let before = tree.evaluate();
    let _ = tree.render();
    assert_eq!(tree.evaluate(), before);
    assert_eq!(before, 0.5);
}

#[test]
fn numbers_format_without_locale() {
    assert_eq!(format_number(1234567.5), "1234567.5");
    assert_eq!(format_number(-0.25), "-0.25");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(-0.0), "-0");
}
