//! The lexer state machine: the dispatcher that ties the location cursor,
//! nesting stack, escape accumulators, and position tracker together into
//! one [`Parser::feed_one`] step per code point.
//!
//! # Examples
//!
//! ```rust
//! use jsonpush::{Parser, ParserOptions, TokenType};
//!
//! let mut parser = Parser::new(ParserOptions::default());
//! let ok = "null"
//!     .chars()
//!     .chain(core::iter::once('\u{0}'))
//!     .map(|c| parser.feed_one(u32::from(c)))
//!     .all(|t| t.kind != TokenType::Error);
//! assert!(ok);
//! ```
#![allow(clippy::too_many_lines)]
#![allow(clippy::match_same_arms)]

use crate::classify::{is_identifier_continue, is_identifier_start, is_whitespace};
use crate::codepoint::{self, EOF};
use crate::error::SyntaxError;
use crate::escape::{self, HexAccumulator, Step as HexStep};
use crate::literal::{Keyword, Matcher, Step as LiteralStep};
use crate::location::{Cursor, Location};
use crate::options::ParserOptions;
use crate::position::{Position, Tracker};
use crate::stack::NestingStack;
use crate::token::{Token, TokenType};

const QUOTE: u32 = 0x22;
const SINGLE_QUOTE: u32 = 0x27;
const BACKSLASH: u32 = 0x5C;
const COLON: u32 = 0x3A;
const COMMA: u32 = 0x2C;

/// The lifecycle stage of a [`Parser`], read via [`Parser::stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No non-trivial code point has been consumed yet.
    NotStarted,
    /// A value is in progress somewhere below the document root.
    Parsing,
    /// The root value has completed, or EOF has been signalled.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberSubstate {
    OnlySign,
    Zero,
    NonLeadingZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExponentSubstate {
    NotYet,
    AfterSign,
    AfterDigit,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Empty,
    Literal(Matcher),
    String,
    StringEscape,
    StringEscapeHex(HexAccumulator<2>),
    StringUnicode(HexAccumulator<4>),
    /// Awaiting the low half of a surrogate pair. `stage` walks `\`, `u`,
    /// then the four hex digits of the paired escape; `hex`'s own digit
    /// count only applies once `stage` reaches 2.
    StringUnicodeNext {
        high: u32,
        stage: u8,
        hex: HexAccumulator<4>,
    },
    StringMultilineCr,
    Number {
        sub: NumberSubstate,
        count: u32,
    },
    NumberFraction {
        count: u32,
    },
    NumberExponent {
        sub: ExponentSubstate,
        count: u32,
    },
    NumberHex {
        count: u32,
    },
    NumberOct {
        count: u32,
    },
    NumberBin {
        count: u32,
    },
    CommentMayStart,
    SingleLineComment,
    MultiLineComment,
    MultiLineCommentMayEnd,
    Identifier,
    IdentifierEscapeStart,
    IdentifierEscape(HexAccumulator<4>),
}

/// A push-driven JSON/JSON5 lexer: feed it one code point at a time and get
/// back exactly one [`Token`] per code point.
///
/// See the crate-level documentation for the overall design; this type
/// owns everything the lexer needs and nothing else — no value tree, no
/// per-token heap allocation.
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParserOptions,
    state: State,
    cursor: Cursor,
    stack: NestingStack,
    position: Tracker,
    quote: u32,
}

impl Parser {
    /// Creates a parser at the document root, ready to receive its first
    /// code point.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            state: State::Empty,
            cursor: Cursor::RootStart,
            stack: NestingStack::default(),
            position: Tracker::default(),
            quote: QUOTE,
        }
    }

    /// The options this parser was constructed with.
    #[must_use]
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// The current position: code points consumed, plus line and column.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.position()
    }

    /// The lifecycle stage, derived from the current cursor and state.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self.cursor {
            Cursor::RootStart if matches!(self.state, State::Empty) => Stage::NotStarted,
            Cursor::RootEnd | Cursor::Eof => Stage::Ended,
            _ => Stage::Parsing,
        }
    }

    /// The nesting depth: how many arrays/objects are currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Feed one code point, producing exactly one [`Token`].
    ///
    /// On success (a non-error token), the position/line/column counters
    /// advance. On error the parser's internal state is left as-is; per
    /// the lexer's error-handling contract, the caller must discard or
    /// reset the parser rather than continue feeding it.
    pub fn feed_one(&mut self, u: u32) -> Token {
        let token = self.step(u);
        if token.kind != TokenType::Error && u != EOF {
            if let Err(err) = self.position.advance(u) {
                return Token::error(err, token.location, token.index);
            }
        }
        token
    }

    /// Feed a whole buffer of code points, writing one [`Token`] per input
    /// code point into `dest`.
    ///
    /// `dest` must be at least as long as `src`. On the first error, that
    /// error token is written to `dest[0]` and `0` is returned; the rest of
    /// `dest` is left untouched and the parser must be discarded or reset.
    /// On full success, every token is written and `src.len()` is returned.
    pub fn feed(&mut self, src: &[u32], dest: &mut [Token]) -> usize {
        for (i, &u) in src.iter().enumerate() {
            let token = self.feed_one(u);
            if token.kind == TokenType::Error {
                dest[0] = token;
                return 0;
            }
            dest[i] = token;
        }
        src.len()
    }

    fn value_location(&self) -> Location {
        self.cursor.coarsen()
    }

    fn is_key_position(&self) -> bool {
        matches!(self.cursor, Cursor::KeyFirstStart | Cursor::KeyStart)
    }

    fn is_value_position(&self) -> bool {
        matches!(
            self.cursor,
            Cursor::RootStart
                | Cursor::ValueStart
                | Cursor::ElementFirstStart
                | Cursor::ElementStart
        )
    }

    fn is_number_separator(&self, u: u32) -> bool {
        u == EOF
            || is_whitespace(u, self.options.json5_whitespace)
            || matches!(u, 0x2C | 0x5D | 0x7D | 0x2F)
    }

    /// The enclosing location a closing bracket resumes at, once its own
    /// level has been popped off the nesting stack.
    fn resume_cursor(&self) -> Cursor {
        match self.stack.peek() {
            Some(true) => Cursor::ElementEnd,
            Some(false) => Cursor::ValueEnd,
            None => Cursor::RootEnd,
        }
    }

    fn step(&mut self, u: u32) -> Token {
        #[cfg(any(test, feature = "fuzzing"))]
        assert_eq!(
            self.stack.is_empty(),
            matches!(self.cursor, Cursor::RootStart | Cursor::RootEnd | Cursor::Eof),
            "nesting stack depth disagrees with cursor: {:?} at depth {}",
            self.cursor,
            self.stack.len(),
        );
        match self.state {
            State::Empty => self.handle_empty(u),
            State::Literal(matcher) => self.handle_literal(matcher, u),
            State::String => self.handle_string(u),
            State::StringEscape => self.handle_string_escape(u),
            State::StringEscapeHex(acc) => self.handle_string_escape_hex(acc, u),
            State::StringUnicode(acc) => self.handle_string_unicode(acc, u),
            State::StringUnicodeNext { high, stage, hex } => {
                self.handle_string_unicode_next(high, stage, hex, u)
            }
            State::StringMultilineCr => self.handle_string_multiline_cr(u),
            State::Number { sub, count } => self.handle_number(sub, count, u),
            State::NumberFraction { count } => self.handle_number_fraction(count, u),
            State::NumberExponent { sub, count } => self.handle_number_exponent(sub, count, u),
            State::NumberHex { count } => self.handle_number_hex(count, u),
            State::NumberOct { count } => self.handle_number_oct(count, u),
            State::NumberBin { count } => self.handle_number_bin(count, u),
            State::CommentMayStart => self.handle_comment_may_start(u),
            State::SingleLineComment => self.handle_single_line_comment(u),
            State::MultiLineComment => self.handle_multi_line_comment(u),
            State::MultiLineCommentMayEnd => self.handle_multi_line_comment_may_end(u),
            State::Identifier => self.handle_identifier(u),
            State::IdentifierEscapeStart => self.handle_identifier_escape_start(u),
            State::IdentifierEscape(acc) => self.handle_identifier_escape(acc, u),
        }
    }

    // --- EMPTY: the structural dispatcher ---

    #[allow(clippy::too_many_lines)]
    fn handle_empty(&mut self, u: u32) -> Token {
        let loc = self.value_location();

        if self.cursor == Cursor::Eof {
            return if u == EOF {
                Token::new(TokenType::Eof, Location::Root, 0)
            } else {
                Token::error(SyntaxError::ContentAfterEof, Location::Root, 0)
            };
        }

        if u != EOF && is_whitespace(u, self.options.json5_whitespace) {
            return Token::new(TokenType::Whitespace, loc, 0);
        }

        if u == EOF {
            return match self.cursor {
                Cursor::RootEnd => {
                    self.cursor = Cursor::Eof;
                    Token::new(TokenType::Eof, Location::Root, 0)
                }
                _ => Token::error(SyntaxError::Eof, loc, 0),
            };
        }

        if u == 0x2F {
            return if self.options.single_line_comment || self.options.multi_line_comment {
                self.state = State::CommentMayStart;
                Token::new(TokenType::CommentMayStart, loc, 0)
            } else {
                Token::error(SyntaxError::CommentForbidden, loc, 0)
            };
        }

        if self.cursor == Cursor::RootEnd {
            return Token::error(SyntaxError::NonwhitespaceAfterEnd, Location::Root, 0);
        }

        if u == SINGLE_QUOTE && !self.options.single_quote {
            return Token::error(SyntaxError::SingleQuoteForbidden, loc, 0);
        }
        if u == QUOTE || u == SINGLE_QUOTE {
            self.quote = u;
            self.state = State::String;
            return Token::new(TokenType::StringStart, loc, 0);
        }

        if self.cursor == Cursor::KeyEnd && u != COLON {
            return Token::error(SyntaxError::ExpectedColon, Location::Object, 0);
        }

        if u == COLON {
            return match self.cursor {
                Cursor::KeyEnd => {
                    self.cursor = Cursor::ValueStart;
                    Token::new(TokenType::ObjectValueStart, Location::Object, 0)
                }
                Cursor::ValueStart => Token::error(SyntaxError::RepeatedColon, loc, 0),
                _ => Token::error(SyntaxError::WrongColon, loc, 0),
            };
        }

        if u == COMMA {
            return match self.cursor {
                Cursor::ValueEnd => {
                    self.cursor = Cursor::KeyStart;
                    Token::new(TokenType::ObjectNext, Location::Object, 0)
                }
                Cursor::ElementEnd => {
                    self.cursor = Cursor::ElementStart;
                    Token::new(TokenType::ArrayNext, Location::Array, 0)
                }
                Cursor::ElementFirstStart => Token::error(SyntaxError::CommaInEmptyArray, loc, 0),
                Cursor::KeyFirstStart => Token::error(SyntaxError::CommaInEmptyObject, loc, 0),
                Cursor::ElementStart | Cursor::KeyStart => {
                    Token::error(SyntaxError::TrailingCommaForbidden, loc, 0)
                }
                Cursor::ValueStart => Token::error(SyntaxError::EmptyValueInObject, loc, 0),
                _ => Token::error(SyntaxError::Unexpected, loc, 0),
            };
        }

        if u == 0x5B {
            return self.open_aggregate(true, loc);
        }
        if u == 0x7B {
            return self.open_aggregate(false, loc);
        }
        if u == 0x5D {
            return self.close_array(loc);
        }
        if u == 0x7D {
            return self.close_object(loc);
        }

        if self.is_value_position() {
            if let Some(token) = self.try_enter_value(u, loc) {
                return token;
            }
        }

        if self.is_key_position() && self.options.identifier_key {
            if is_identifier_start(u) {
                self.state = State::Identifier;
                return Token::new(TokenType::IdentifierNormal, loc, 0);
            }
            if u == BACKSLASH {
                self.state = State::IdentifierEscapeStart;
                return Token::new(TokenType::IdentifierEscapeStart, loc, 0);
            }
        }

        if self.is_key_position() {
            return Token::error(SyntaxError::BadPropertyNameInObject, loc, 0);
        }
        Token::error(SyntaxError::Unexpected, loc, 0)
    }

    fn open_aggregate(&mut self, is_array: bool, loc: Location) -> Token {
        if !self.is_value_position() {
            return if self.is_key_position() {
                Token::error(SyntaxError::BadPropertyNameInObject, loc, 0)
            } else {
                Token::error(SyntaxError::Unexpected, loc, 0)
            };
        }
        if let Err(err) = self.stack.push(is_array) {
            return Token::error(err, loc, 0);
        }
        self.cursor = if is_array {
            Cursor::ElementFirstStart
        } else {
            Cursor::KeyFirstStart
        };
        let kind = if is_array {
            TokenType::ArrayStart
        } else {
            TokenType::ObjectStart
        };
        let location = if is_array {
            Location::Array
        } else {
            Location::Object
        };
        Token::new(kind, location, 0)
    }

    fn close_array(&mut self, loc: Location) -> Token {
        match self.cursor {
            Cursor::ElementFirstStart | Cursor::ElementEnd => self.do_close_array(),
            Cursor::ElementStart => {
                if self.options.trailing_comma_in_array {
                    self.do_close_array()
                } else {
                    Token::error(SyntaxError::TrailingCommaForbidden, loc, 0)
                }
            }
            _ => Token::error(SyntaxError::WrongBracket, loc, 0),
        }
    }

    fn do_close_array(&mut self) -> Token {
        self.stack.pop();
        self.cursor = self.resume_cursor();
        Token::new(TokenType::ArrayEnd, Location::Array, 0)
    }

    fn close_object(&mut self, loc: Location) -> Token {
        match self.cursor {
            Cursor::KeyFirstStart | Cursor::ValueEnd => self.do_close_object(),
            Cursor::KeyStart => {
                if self.options.trailing_comma_in_object {
                    self.do_close_object()
                } else {
                    Token::error(SyntaxError::TrailingCommaForbidden, loc, 0)
                }
            }
            _ => Token::error(SyntaxError::WrongBracket, loc, 0),
        }
    }

    fn do_close_object(&mut self) -> Token {
        self.stack.pop();
        self.cursor = self.resume_cursor();
        Token::new(TokenType::ObjectEnd, Location::Object, 0)
    }

    /// Tries to enter a number or keyword-literal value. `None` if `u`
    /// doesn't start any of them, leaving the caller to try other
    /// alternatives (identifier keys, the final error fallback).
    fn try_enter_value(&mut self, u: u32, loc: Location) -> Option<Token> {
        match u {
            0x30..=0x39 => {
                let sub = if u == 0x30 {
                    NumberSubstate::Zero
                } else {
                    NumberSubstate::NonLeadingZero
                };
                self.state = State::Number { sub, count: 1 };
                Some(Token::new(TokenType::NumberIntegerDigit, loc, 0))
            }
            0x2D => {
                self.state = State::Number {
                    sub: NumberSubstate::OnlySign,
                    count: 0,
                };
                Some(Token::new(TokenType::NumberIntegerSign, loc, 0))
            }
            0x2B if self.options.positive_sign => {
                self.state = State::Number {
                    sub: NumberSubstate::OnlySign,
                    count: 0,
                };
                Some(Token::new(TokenType::NumberIntegerSign, loc, 0))
            }
            0x2B => Some(Token::error(SyntaxError::PositiveSignForbidden, loc, 0)),
            0x2E if self.options.empty_integer => {
                self.state = State::NumberFraction { count: 0 };
                Some(Token::new(TokenType::NumberFractionStart, loc, 0))
            }
            0x4E if self.options.nan => {
                self.state = State::Literal(Matcher::new(Keyword::Nan));
                Some(Token::new(TokenType::NumberNan, loc, 0))
            }
            0x49 if self.options.infinity => {
                self.state = State::Literal(Matcher::new(Keyword::Infinity));
                Some(Token::new(TokenType::NumberInfinity, loc, 0))
            }
            0x6E => {
                self.state = State::Literal(Matcher::new(Keyword::Null));
                Some(Token::new(TokenType::Null, loc, 0))
            }
            0x74 => {
                self.state = State::Literal(Matcher::new(Keyword::True));
                Some(Token::new(TokenType::True, loc, 0))
            }
            0x66 => {
                self.state = State::Literal(Matcher::new(Keyword::False));
                Some(Token::new(TokenType::False, loc, 0))
            }
            _ => None,
        }
    }

    // --- keyword literals: null, true, false, NaN, Infinity ---

    fn handle_literal(&mut self, mut matcher: Matcher, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(matcher.index());
        let kind = literal_token_type(matcher.keyword());
        match matcher.step(u) {
            LiteralStep::Reject => Token::error(literal_error(matcher.keyword()), loc, idx),
            LiteralStep::NeedMore => {
                self.state = State::Literal(matcher);
                Token::new(kind, loc, idx)
            }
            LiteralStep::Done => {
                self.state = State::Empty;
                self.cursor = self.cursor.next();
                Token::new(kind, loc, idx).done_with(literal_extra(matcher.keyword()))
            }
        }
    }

    // --- strings ---

    fn handle_string(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == self.quote {
            self.state = State::Empty;
            self.cursor = self.cursor.next();
            return Token::new(TokenType::StringEnd, loc, 0);
        }
        if u == BACKSLASH {
            self.state = State::StringEscape;
            return Token::new(TokenType::StringEscapeStart, loc, 0);
        }
        if u == EOF {
            return Token::error(SyntaxError::Eof, loc, 0);
        }
        if u <= 0x1F || u == 0x7F {
            return Token::error(SyntaxError::ControlCharacterForbiddenInString, loc, 0);
        }
        if !codepoint::is_valid_input(u) {
            return Token::error(SyntaxError::InvalidInputUtf, loc, 0);
        }
        Token::new(TokenType::StringNormal, loc, 0)
    }

    fn handle_string_multiline_cr(&mut self, u: u32) -> Token {
        if u == 0x0A {
            self.state = State::String;
            return Token::new(TokenType::StringNextLine, self.value_location(), 0);
        }
        self.state = State::String;
        self.handle_string(u)
    }

    fn handle_string_escape(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        let simple = match u {
            0x22 => Some(0x22),
            0x5C => Some(0x5C),
            0x2F => Some(0x2F),
            0x62 => Some(0x08),
            0x66 => Some(0x0C),
            0x6E => Some(0x0A),
            0x72 => Some(0x0D),
            0x74 => Some(0x09),
            0x27 if self.options.json5_string_escape => Some(0x27),
            0x76 if self.options.json5_string_escape => Some(0x0B),
            0x30 if self.options.json5_string_escape => Some(0x00),
            _ => None,
        };
        if let Some(decoded) = simple {
            self.state = State::String;
            return Token::new(TokenType::StringEscape, loc, 0).done_with(decoded);
        }
        if u == 0x75 {
            self.state = State::StringUnicode(HexAccumulator::default());
            return Token::new(TokenType::StringEscapeUnicodeStart, loc, 0);
        }
        if u == 0x78 && self.options.json5_string_escape {
            self.state = State::StringEscapeHex(HexAccumulator::default());
            return Token::new(TokenType::StringEscapeHexStart, loc, 0);
        }
        if self.options.multiline_string {
            match u {
                0x0D => {
                    self.state = State::StringMultilineCr;
                    return Token::new(TokenType::StringNextLine, loc, 0);
                }
                0x0A | 0x2028 | 0x2029 => {
                    self.state = State::String;
                    return Token::new(TokenType::StringNextLine, loc, 0);
                }
                _ => {}
            }
        }
        Token::error(SyntaxError::BadEscapeInString, loc, 0)
    }

    fn handle_string_escape_hex(&mut self, mut acc: HexAccumulator<2>, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(acc.digits());
        match acc.feed(u) {
            Err(_) => Token::error(SyntaxError::BadHexEscapeInString, loc, idx),
            Ok(HexStep::NeedMore) => {
                self.state = State::StringEscapeHex(acc);
                Token::new(TokenType::StringEscapeHex, loc, idx)
            }
            Ok(HexStep::Done(value)) => {
                self.state = State::String;
                Token::new(TokenType::StringEscapeHex, loc, idx).done_with(value)
            }
        }
    }

    fn handle_string_unicode(&mut self, mut acc: HexAccumulator<4>, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(acc.digits());
        match acc.feed(u) {
            Err(_) => Token::error(SyntaxError::BadUnicodeEscapeInString, loc, idx),
            Ok(HexStep::NeedMore) => {
                self.state = State::StringUnicode(acc);
                Token::new(TokenType::StringEscapeUnicode, loc, idx)
            }
            Ok(HexStep::Done(value)) => {
                if codepoint::is_surrogate(value) {
                    #[cfg(not(feature = "no-surrogate-combine"))]
                    if escape::is_high_surrogate(value) {
                        self.state = State::StringUnicodeNext {
                            high: value,
                            stage: 0,
                            hex: HexAccumulator::default(),
                        };
                        return Token::new(TokenType::StringEscapeUnicode, loc, idx);
                    }
                    return Token::error(SyntaxError::InvalidEscapedUtf, loc, idx);
                }
                self.state = State::String;
                Token::new(TokenType::StringEscapeUnicode, loc, idx).done_with(value)
            }
        }
    }

    fn handle_string_unicode_next(
        &mut self,
        high: u32,
        stage: u8,
        hex: HexAccumulator<4>,
        u: u32,
    ) -> Token {
        let loc = self.value_location();
        match stage {
            0 => {
                if u == BACKSLASH {
                    self.state = State::StringUnicodeNext {
                        high,
                        stage: 1,
                        hex,
                    };
                    Token::new(TokenType::StringEscapeStart, loc, 4)
                } else {
                    Token::error(SyntaxError::IncompleteSurrogatePair, loc, 4)
                }
            }
            1 => {
                if u == 0x75 {
                    self.state = State::StringUnicodeNext {
                        high,
                        stage: 2,
                        hex,
                    };
                    Token::new(TokenType::StringEscapeUnicodeStart, loc, 5)
                } else {
                    Token::error(SyntaxError::IncompleteSurrogatePair, loc, 5)
                }
            }
            _ => {
                let mut hex = hex;
                let idx = 6 + u64::from(hex.digits());
                match hex.feed(u) {
                    Err(_) => Token::error(SyntaxError::BadUnicodeEscapeInString, loc, idx),
                    Ok(HexStep::NeedMore) => {
                        self.state = State::StringUnicodeNext { high, stage, hex };
                        Token::new(TokenType::StringEscapeUnicode, loc, idx)
                    }
                    Ok(HexStep::Done(low)) => {
                        if escape::is_low_surrogate(low) {
                            let combined = escape::combine_surrogates(high, low);
                            self.state = State::String;
                            Token::new(TokenType::StringEscapeUnicode, loc, idx)
                                .done_with(combined)
                        } else {
                            Token::error(SyntaxError::IncompleteSurrogatePair, loc, idx)
                        }
                    }
                }
            }
        }
    }

    // --- numbers ---

    fn handle_number(&mut self, sub: NumberSubstate, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            return match sub {
                NumberSubstate::OnlySign => Token::error(SyntaxError::EmptyIntegerPart, loc, idx),
                _ => self.finish_number(u),
            };
        }
        match u {
            0x30 => match sub {
                NumberSubstate::Zero => Token::error(SyntaxError::LeadingZeroForbidden, loc, idx),
                _ => {
                    self.state = State::Number {
                        sub: NumberSubstate::Zero,
                        count: count + 1,
                    };
                    Token::new(TokenType::NumberIntegerDigit, loc, idx)
                }
            },
            0x31..=0x39 => match sub {
                NumberSubstate::Zero => Token::error(SyntaxError::LeadingZeroForbidden, loc, idx),
                _ => {
                    self.state = State::Number {
                        sub: NumberSubstate::NonLeadingZero,
                        count: count + 1,
                    };
                    Token::new(TokenType::NumberIntegerDigit, loc, idx)
                }
            },
            0x2E => {
                if matches!(sub, NumberSubstate::OnlySign) && !self.options.empty_integer {
                    return Token::error(SyntaxError::EmptyIntegerPart, loc, idx);
                }
                self.state = State::NumberFraction { count: 0 };
                Token::new(TokenType::NumberFractionStart, loc, 0)
            }
            0x65 | 0x45 => {
                if matches!(sub, NumberSubstate::OnlySign) {
                    return Token::error(SyntaxError::EmptyIntegerPart, loc, idx);
                }
                self.state = State::NumberExponent {
                    sub: ExponentSubstate::NotYet,
                    count: 0,
                };
                Token::new(TokenType::NumberExponentStart, loc, 0)
            }
            0x78 | 0x58 if self.options.hexadecimal_integer => match sub {
                NumberSubstate::Zero => {
                    self.state = State::NumberHex { count: 0 };
                    Token::new(TokenType::NumberHexStart, loc, 0)
                }
                _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
            },
            0x6F | 0x4F if self.options.octal_integer => match sub {
                NumberSubstate::Zero => {
                    self.state = State::NumberOct { count: 0 };
                    Token::new(TokenType::NumberOctStart, loc, 0)
                }
                _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
            },
            0x62 | 0x42 if self.options.binary_integer => match sub {
                NumberSubstate::Zero => {
                    self.state = State::NumberBin { count: 0 };
                    Token::new(TokenType::NumberBinStart, loc, 0)
                }
                _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
            },
            0x49 if self.options.infinity && matches!(sub, NumberSubstate::OnlySign) => {
                self.state = State::Literal(Matcher::new(Keyword::Infinity));
                Token::new(TokenType::NumberInfinity, loc, 0)
            }
            0x4E if self.options.nan && matches!(sub, NumberSubstate::OnlySign) => {
                self.state = State::Literal(Matcher::new(Keyword::Nan));
                Token::new(TokenType::NumberNan, loc, 0)
            }
            _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
        }
    }

    fn handle_number_fraction(&mut self, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            if count == 0 && !self.options.empty_fraction {
                return Token::error(SyntaxError::EmptyFractionPart, loc, idx);
            }
            return self.finish_number(u);
        }
        match u {
            0x30..=0x39 => {
                self.state = State::NumberFraction { count: count + 1 };
                Token::new(TokenType::NumberFractionDigit, loc, idx)
            }
            0x65 | 0x45 => {
                if count == 0 && !self.options.empty_fraction {
                    return Token::error(SyntaxError::EmptyFractionPart, loc, idx);
                }
                self.state = State::NumberExponent {
                    sub: ExponentSubstate::NotYet,
                    count: 0,
                };
                Token::new(TokenType::NumberExponentStart, loc, 0)
            }
            _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
        }
    }

    fn handle_number_exponent(&mut self, sub: ExponentSubstate, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            return match sub {
                ExponentSubstate::AfterDigit => self.finish_number(u),
                _ => Token::error(SyntaxError::EmptyExponentPart, loc, idx),
            };
        }
        match u {
            0x2B | 0x2D if matches!(sub, ExponentSubstate::NotYet) => {
                self.state = State::NumberExponent {
                    sub: ExponentSubstate::AfterSign,
                    count,
                };
                Token::new(TokenType::NumberExponentSign, loc, 0)
            }
            0x30..=0x39 => {
                self.state = State::NumberExponent {
                    sub: ExponentSubstate::AfterDigit,
                    count: count + 1,
                };
                Token::new(TokenType::NumberExponentDigit, loc, idx)
            }
            _ => Token::error(SyntaxError::UnexpectedInNumber, loc, idx),
        }
    }

    fn handle_number_hex(&mut self, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            if count == 0 {
                return Token::error(SyntaxError::UnexpectedInNumber, loc, idx);
            }
            return self.finish_number(u);
        }
        if matches!(u, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66) {
            self.state = State::NumberHex { count: count + 1 };
            return Token::new(TokenType::NumberHex, loc, idx);
        }
        if u == 0x2E {
            return Token::error(SyntaxError::FractionNotAllowed, loc, idx);
        }
        Token::error(SyntaxError::UnexpectedInNumber, loc, idx)
    }

    fn handle_number_oct(&mut self, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            if count == 0 {
                return Token::error(SyntaxError::UnexpectedInNumber, loc, idx);
            }
            return self.finish_number(u);
        }
        if matches!(u, 0x30..=0x37) {
            self.state = State::NumberOct { count: count + 1 };
            return Token::new(TokenType::NumberOct, loc, idx);
        }
        if u == 0x2E {
            return Token::error(SyntaxError::FractionNotAllowed, loc, idx);
        }
        if matches!(u, 0x65 | 0x45) {
            return Token::error(SyntaxError::ExponentNotAllowed, loc, idx);
        }
        Token::error(SyntaxError::UnexpectedInNumber, loc, idx)
    }

    fn handle_number_bin(&mut self, count: u32, u: u32) -> Token {
        let loc = self.value_location();
        let idx = u64::from(count);
        if self.is_number_separator(u) {
            if count == 0 {
                return Token::error(SyntaxError::UnexpectedInNumber, loc, idx);
            }
            return self.finish_number(u);
        }
        if matches!(u, 0x30..=0x31) {
            self.state = State::NumberBin { count: count + 1 };
            return Token::new(TokenType::NumberBin, loc, idx);
        }
        if u == 0x2E {
            return Token::error(SyntaxError::FractionNotAllowed, loc, idx);
        }
        if matches!(u, 0x65 | 0x45) {
            return Token::error(SyntaxError::ExponentNotAllowed, loc, idx);
        }
        Token::error(SyntaxError::UnexpectedInNumber, loc, idx)
    }

    /// The hardest transition: a number state saw a separator. It doesn't
    /// emit a "number end" token of its own; it resets to `EMPTY`, advances
    /// the location, and re-dispatches the separator as if no number had
    /// been in progress.
    fn finish_number(&mut self, u: u32) -> Token {
        self.state = State::Empty;
        self.cursor = self.cursor.next();
        self.handle_empty(u)
    }

    // --- JSON5 bare identifier keys ---

    fn handle_identifier(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == COLON {
            self.state = State::Empty;
            self.cursor = Cursor::ValueStart;
            return Token::new(TokenType::ObjectValueStart, Location::Object, 0);
        }
        if is_whitespace(u, self.options.json5_whitespace) {
            self.state = State::Empty;
            self.cursor = Cursor::KeyEnd;
            return Token::new(TokenType::Whitespace, loc, 0);
        }
        if is_identifier_continue(u) {
            return Token::new(TokenType::IdentifierNormal, loc, 0);
        }
        Token::error(SyntaxError::InvalidIdentifier, loc, 0)
    }

    fn handle_identifier_escape_start(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == 0x75 {
            self.state = State::IdentifierEscape(HexAccumulator::default());
            return Token::new(TokenType::IdentifierEscape, loc, 0);
        }
        Token::error(SyntaxError::BadIdentifierEscape, loc, 0)
    }

    fn handle_identifier_escape(&mut self, mut acc: HexAccumulator<4>, u: u32) -> Token {
        let loc = self.value_location();
        let idx = 1 + u64::from(acc.digits());
        match acc.feed(u) {
            Err(_) => Token::error(SyntaxError::InvalidIdentifierEscape, loc, idx),
            Ok(HexStep::NeedMore) => {
                self.state = State::IdentifierEscape(acc);
                Token::new(TokenType::IdentifierEscape, loc, idx)
            }
            Ok(HexStep::Done(value)) => {
                if codepoint::is_surrogate(value) {
                    return Token::error(SyntaxError::InvalidIdentifierEscape, loc, idx);
                }
                self.state = State::Empty;
                self.cursor = Cursor::KeyEnd;
                Token::new(TokenType::IdentifierEscape, loc, idx).done_with(value)
            }
        }
    }

    // --- comments ---

    fn handle_comment_may_start(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == 0x2F && self.options.single_line_comment {
            self.state = State::SingleLineComment;
            return Token::new(TokenType::CommentSingleLine, loc, 0);
        }
        if u == 0x2A && self.options.multi_line_comment {
            self.state = State::MultiLineComment;
            return Token::new(TokenType::CommentMultiLine, loc, 0);
        }
        Token::error(SyntaxError::CommentForbidden, loc, 0)
    }

    fn handle_single_line_comment(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == EOF || is_line_terminator(u) {
            self.state = State::Empty;
            return self.handle_empty(u);
        }
        Token::new(TokenType::CommentSingleLine, loc, 0)
    }

    fn handle_multi_line_comment(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == EOF {
            return Token::error(SyntaxError::Eof, loc, 0);
        }
        if u == 0x2A {
            self.state = State::MultiLineCommentMayEnd;
        }
        Token::new(TokenType::CommentMultiLine, loc, 0)
    }

    fn handle_multi_line_comment_may_end(&mut self, u: u32) -> Token {
        let loc = self.value_location();
        if u == EOF {
            return Token::error(SyntaxError::Eof, loc, 0);
        }
        if u == 0x2F {
            self.state = State::Empty;
            return Token::new(TokenType::CommentMultiLineEnd, loc, 0);
        }
        if u != 0x2A {
            self.state = State::MultiLineComment;
        }
        Token::new(TokenType::CommentMultiLine, loc, 0)
    }
}

fn is_line_terminator(u: u32) -> bool {
    matches!(u, 0x0A | 0x0D | 0x2028 | 0x2029)
}

fn literal_token_type(keyword: Keyword) -> TokenType {
    match keyword {
        Keyword::Null => TokenType::Null,
        Keyword::True => TokenType::True,
        Keyword::False => TokenType::False,
        Keyword::Nan => TokenType::NumberNan,
        Keyword::Infinity => TokenType::NumberInfinity,
    }
}

fn literal_error(keyword: Keyword) -> SyntaxError {
    match keyword {
        Keyword::Null | Keyword::True | Keyword::False => SyntaxError::Unexpected,
        Keyword::Nan | Keyword::Infinity => SyntaxError::UnexpectedInNumber,
    }
}

/// `extra` payload for a completed keyword: the boolean value for `true`,
/// zero otherwise (`NaN`/`Infinity` carry no single code point worth
/// reporting; the caller reconstructs the numeric value from the digit
/// stream it already saw).
fn literal_extra(keyword: Keyword) -> u32 {
    match keyword {
        Keyword::True => 1,
        Keyword::Null | Keyword::False | Keyword::Nan | Keyword::Infinity => 0,
    }
}
