//! Integration scenarios lifted from the published concrete examples: feed a
//! whole document through [`Parser::feed_one`] and check the resulting
//! token stream shape.

use jsonpush::{Category, Parser, ParserOptions, SyntaxError, Token, TokenType};
use rstest::rstest;

fn feed_str(parser: &mut Parser, s: &str) -> Vec<Token> {
    let mut out: Vec<Token> = s.chars().map(|c| parser.feed_one(u32::from(c))).collect();
    out.push(parser.feed_one(0));
    out
}

fn assert_no_errors(tokens: &[Token]) {
    for t in tokens {
        assert_ne!(t.kind, TokenType::Error, "unexpected error token: {t:?}");
    }
}

fn first_error(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().find(|t| t.kind == TokenType::Error)
}

fn render_kinds(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?}", t.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn scenario_null() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "null");
    assert_no_errors(&tokens);
    assert_eq!(tokens.len(), 5);
    for t in &tokens[..4] {
        assert_eq!(t.kind, TokenType::Null);
    }
    assert!(tokens[3].done);
    assert_eq!(tokens[4].kind, TokenType::Eof);
}

#[test]
fn scenario_standard_object() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, r#"{"a":1}"#);
    assert_no_errors(&tokens);

    insta::assert_snapshot!(render_kinds(&tokens), @r"
    ObjectStart
    StringStart
    StringNormal
    StringEnd
    ObjectValueStart
    NumberIntegerDigit
    ObjectEnd
    Eof
    ");
}

#[test]
fn scenario_identifier_key_with_option() {
    let mut parser = Parser::new(ParserOptions {
        identifier_key: true,
        ..ParserOptions::default()
    });
    let tokens = feed_str(&mut parser, "{a:1}");
    assert_no_errors(&tokens);

    insta::assert_snapshot!(render_kinds(&tokens), @r"
    ObjectStart
    IdentifierNormal
    ObjectValueStart
    NumberIntegerDigit
    ObjectEnd
    Eof
    ");
}

#[test]
fn scenario_identifier_key_without_option_errors() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "{a:1}");
    let err = first_error(&tokens).expect("expected an error token");
    assert_eq!(err.extra, u32::from(SyntaxError::BadPropertyNameInObject.code()));
}

#[test]
fn scenario_surrogate_pair_escape() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "\"\\uD83D\\uDE00\"");
    assert_no_errors(&tokens);

    let unicode_tokens: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenType::StringEscapeUnicode)
        .collect();
    // high surrogate (4 digits) + `\`, `u`, and 4 low-surrogate digits = 10
    // steps total (indices 0..=9), but the `\`/`u` pair of the second half
    // are StringEscapeStart/StringEscapeUnicodeStart, so only 8 of those
    // carry TokenType::StringEscapeUnicode.
    assert_eq!(unicode_tokens.len(), 8);
    let done: Vec<&&Token> = unicode_tokens.iter().filter(|t| t.done).collect();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].extra, 0x1F600);
    assert_eq!(done[0].index, 9);

    assert_eq!(tokens.last().unwrap().kind, TokenType::Eof);
}

#[rstest]
#[case(false, true)] // option off -> error
#[case(true, false)] // option on -> no error
fn scenario_trailing_comma_in_array(#[case] option_on: bool, #[case] expect_error: bool) {
    let mut parser = Parser::new(ParserOptions {
        trailing_comma_in_array: option_on,
        ..ParserOptions::default()
    });
    let tokens = feed_str(&mut parser, "[1,]");
    assert_eq!(first_error(&tokens).is_some(), expect_error);
    if !expect_error {
        insta::assert_snapshot!(render_kinds(&tokens), @r"
        ArrayStart
        NumberIntegerDigit
        ArrayNext
        ArrayEnd
        Eof
        ");
    }
}

#[test]
fn scenario_leading_zero_forbidden() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "0123");
    let err = first_error(&tokens).expect("expected an error token");
    assert_eq!(err.extra, u32::from(SyntaxError::LeadingZeroForbidden.code()));
}

#[rstest]
#[case(ParserOptions::strict())]
#[case(ParserOptions::json5())]
fn valid_document_under_each_bundle_yields_no_errors(#[case] options: ParserOptions) {
    let mut parser = Parser::new(options);
    let tokens = feed_str(&mut parser, r#"{"a":1,"b":[true,false,null]}"#);
    assert_no_errors(&tokens);
    assert_eq!(tokens.last().unwrap().kind, TokenType::Eof);
}

#[test]
fn json5_bundle_accepts_the_full_extension_surface() {
    let mut parser = Parser::new(ParserOptions::json5());
    let src = "{\n  // a comment\n  unquoted: 'single quotes',\n  hex: 0xFF,\n  plus: +1,\n  frac: .5,\n  trail: 1.,\n  list: [1, 2, 3,],\n}";
    let tokens = feed_str(&mut parser, src);
    assert_no_errors(&tokens);
    assert_eq!(tokens.last().unwrap().kind, TokenType::Eof);
}

#[test]
fn positive_sign_requires_option() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "+1");
    let err = first_error(&tokens).expect("expected an error token");
    assert_eq!(err.extra, u32::from(SyntaxError::PositiveSignForbidden.code()));
}

#[test]
fn comment_requires_option() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "// hi\n1");
    let err = first_error(&tokens).expect("expected an error token");
    assert_eq!(err.extra, u32::from(SyntaxError::CommentForbidden.code()));
}

#[test]
fn single_quote_requires_option() {
    let mut parser = Parser::new(ParserOptions::default());
    let tokens = feed_str(&mut parser, "'abc'");
    let err = first_error(&tokens).expect("expected an error token");
    assert_eq!(err.extra, u32::from(SyntaxError::SingleQuoteForbidden.code()));
}

#[test]
fn hex_octal_binary_integers_are_independently_gated() {
    let hex_only = ParserOptions {
        hexadecimal_integer: true,
        ..ParserOptions::default()
    };
    let mut parser = Parser::new(hex_only);
    assert_no_errors(&feed_str(&mut parser, "0x1A"));

    let mut parser = Parser::new(hex_only);
    let tokens = feed_str(&mut parser, "0o17");
    assert!(first_error(&tokens).is_some());

    let oct_only = ParserOptions {
        octal_integer: true,
        ..ParserOptions::default()
    };
    let mut parser = Parser::new(oct_only);
    assert_no_errors(&feed_str(&mut parser, "0o17"));

    let bin_only = ParserOptions {
        binary_integer: true,
        ..ParserOptions::default()
    };
    let mut parser = Parser::new(bin_only);
    assert_no_errors(&feed_str(&mut parser, "0b101"));
}

#[test]
fn nan_and_infinity_require_option() {
    let mut parser = Parser::new(ParserOptions::default());
    assert!(first_error(&feed_str(&mut parser, "NaN")).is_some());

    let mut parser = Parser::new(ParserOptions {
        nan: true,
        ..ParserOptions::default()
    });
    assert_no_errors(&feed_str(&mut parser, "NaN"));

    let mut parser = Parser::new(ParserOptions {
        infinity: true,
        ..ParserOptions::default()
    });
    assert_no_errors(&feed_str(&mut parser, "Infinity"));
}

#[test]
fn content_after_root_value_requires_whitespace() {
    let mut parser = Parser::new(ParserOptions::default());
    assert_eq!(
        parser.feed_one(u32::from('1')).kind,
        TokenType::NumberIntegerDigit
    );
    assert_eq!(parser.feed_one(u32::from(' ')).kind, TokenType::Whitespace);
    let err = parser.feed_one(u32::from('2'));
    assert_eq!(err.kind, TokenType::Error);
    assert_eq!(
        err.extra,
        u32::from(SyntaxError::NonwhitespaceAfterEnd.code())
    );
}

#[test]
fn every_category_round_trips_through_its_discriminant() {
    let samples = [
        TokenType::Whitespace,
        TokenType::Eof,
        TokenType::Null,
        TokenType::True,
        TokenType::StringNormal,
        TokenType::NumberIntegerDigit,
        TokenType::ObjectStart,
        TokenType::ArrayStart,
        TokenType::IdentifierNormal,
        TokenType::CommentSingleLine,
    ];
    let categories = [
        Category::Whitespace,
        Category::Eof,
        Category::Null,
        Category::Boolean,
        Category::String,
        Category::Number,
        Category::Object,
        Category::Array,
        Category::Identifier,
        Category::Comment,
    ];
    for (kind, category) in samples.iter().zip(categories) {
        assert_eq!(kind.category(), category);
    }
}
