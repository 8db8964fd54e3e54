//! The token alphabet: one [`Token`] is produced per code point fed to the
//! parser.

use crate::error::SyntaxError;
use crate::location::Location;

const SHIFT: u32 = 4;

/// The coarse kind of token, recoverable from a [`TokenType`] by shifting
/// off the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Category {
    /// A lexing error; terminal.
    Error = 0,
    /// Insignificant whitespace.
    Whitespace = 1,
    /// The end-of-input sentinel.
    Eof = 2,
    /// The `null` literal.
    Null = 3,
    /// `true`/`false`.
    Boolean = 4,
    /// A string value or key, one step at a time.
    String = 5,
    /// A number value, one step at a time.
    Number = 6,
    /// Object structural tokens.
    Object = 7,
    /// Array structural tokens.
    Array = 8,
    /// A JSON5 bare identifier used as an object key.
    Identifier = 9,
    /// A JSON5 comment, one step at a time.
    Comment = 10,
}

/// The precise kind of token emitted for one code point.
///
/// Numeric values are a stable `category << 4 | nibble` layout, so callers
/// that only care about coarse category can mask the low nibble instead of
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenType {
    /// A syntax error; `extra` carries the [`SyntaxError::code`].
    Error = 0,
    /// One code point of insignificant whitespace.
    Whitespace = (Category::Whitespace as u32) << SHIFT,
    /// The end-of-input sentinel.
    Eof = (Category::Eof as u32) << SHIFT,
    /// One code point of the `null` literal.
    Null = (Category::Null as u32) << SHIFT,
    /// One code point of `false`.
    False = (Category::Boolean as u32) << SHIFT,
    /// One code point of `true`.
    True = ((Category::Boolean as u32) << SHIFT) | 0x1,

    /// The opening quote of a string.
    StringStart = (Category::String as u32) << SHIFT,
    /// The closing quote of a string.
    StringEnd = ((Category::String as u32) << SHIFT) | 0x1,
    /// One unescaped character inside a string.
    StringNormal = ((Category::String as u32) << SHIFT) | 0x2,
    /// The `\` that opens an escape sequence.
    StringEscapeStart = ((Category::String as u32) << SHIFT) | 0x3,
    /// One character of a one-character escape (`\n`, `\t`, ...).
    StringEscape = ((Category::String as u32) << SHIFT) | 0x4,
    /// The `u` that opens a `\uXXXX` escape.
    StringEscapeUnicodeStart = ((Category::String as u32) << SHIFT) | 0x5,
    /// One hex digit of a `\uXXXX` escape.
    StringEscapeUnicode = ((Category::String as u32) << SHIFT) | 0x6,
    /// A JSON5 escaped line terminator inside a string.
    StringNextLine = ((Category::String as u32) << SHIFT) | 0x7,
    /// The `x` that opens a JSON5 `\xXX` escape.
    StringEscapeHexStart = ((Category::String as u32) << SHIFT) | 0x8,
    /// One hex digit of a JSON5 `\xXX` escape.
    StringEscapeHex = ((Category::String as u32) << SHIFT) | 0x9,

    /// One digit of a number's integer part.
    NumberIntegerDigit = (Category::Number as u32) << SHIFT,
    /// One digit of a number's fraction part.
    NumberFractionDigit = ((Category::Number as u32) << SHIFT) | 0x1,
    /// One digit of a number's exponent part.
    NumberExponentDigit = ((Category::Number as u32) << SHIFT) | 0x2,
    /// The leading `+`/`-` sign of a number.
    NumberIntegerSign = ((Category::Number as u32) << SHIFT) | 0x3,
    /// The `+`/`-` sign of an exponent.
    NumberExponentSign = ((Category::Number as u32) << SHIFT) | 0x4,
    /// The `.` that opens a fraction part.
    NumberFractionStart = ((Category::Number as u32) << SHIFT) | 0x5,
    /// The `e`/`E` that opens an exponent part.
    NumberExponentStart = ((Category::Number as u32) << SHIFT) | 0x6,
    /// One character of a `NaN` literal.
    NumberNan = ((Category::Number as u32) << SHIFT) | 0x7,
    /// One character of an `Infinity` literal.
    NumberInfinity = ((Category::Number as u32) << SHIFT) | 0x8,
    /// The `x`/`X` that opens a hex literal.
    NumberHexStart = ((Category::Number as u32) << SHIFT) | 0x9,
    /// One digit of a hex literal.
    NumberHex = ((Category::Number as u32) << SHIFT) | 0xA,
    /// The `o`/`O` that opens an octal literal.
    NumberOctStart = ((Category::Number as u32) << SHIFT) | 0xB,
    /// One digit of an octal literal.
    NumberOct = ((Category::Number as u32) << SHIFT) | 0xC,
    /// The `b`/`B` that opens a binary literal.
    NumberBinStart = ((Category::Number as u32) << SHIFT) | 0xD,
    /// One digit of a binary literal.
    NumberBin = ((Category::Number as u32) << SHIFT) | 0xE,

    /// `{`
    ObjectStart = (Category::Object as u32) << SHIFT,
    /// `,` between object members.
    ObjectNext = ((Category::Object as u32) << SHIFT) | 0x1,
    /// `:` between a key and its value.
    ObjectValueStart = ((Category::Object as u32) << SHIFT) | 0x2,
    /// `}`
    ObjectEnd = ((Category::Object as u32) << SHIFT) | 0x3,

    /// `[`
    ArrayStart = (Category::Array as u32) << SHIFT,
    /// `,` between array elements.
    ArrayNext = ((Category::Array as u32) << SHIFT) | 0x1,
    /// `]`
    ArrayEnd = ((Category::Array as u32) << SHIFT) | 0x2,

    /// One character of a bare identifier key.
    IdentifierNormal = (Category::Identifier as u32) << SHIFT,
    /// The `\` that opens an identifier's `\uXXXX` escape.
    IdentifierEscapeStart = ((Category::Identifier as u32) << SHIFT) | 0x1,
    /// One hex digit of an identifier's `\uXXXX` escape.
    IdentifierEscape = ((Category::Identifier as u32) << SHIFT) | 0x2,

    /// The `/` that might open a JSON5 comment.
    CommentMayStart = (Category::Comment as u32) << SHIFT,
    /// One character of a `//` line comment.
    CommentSingleLine = ((Category::Comment as u32) << SHIFT) | 0x1,
    /// One character inside a `/* */` block comment.
    CommentMultiLine = ((Category::Comment as u32) << SHIFT) | 0x3,
    /// The `/` that closes a `/* */` block comment.
    CommentMultiLineEnd = ((Category::Comment as u32) << SHIFT) | 0x4,
}

impl TokenType {
    /// The coarse category this token type belongs to.
    #[must_use]
    pub fn category(self) -> Category {
        match (self as u32) >> SHIFT {
            1 => Category::Whitespace,
            2 => Category::Eof,
            3 => Category::Null,
            4 => Category::Boolean,
            5 => Category::String,
            6 => Category::Number,
            7 => Category::Object,
            8 => Category::Array,
            9 => Category::Identifier,
            10 => Category::Comment,
            _ => Category::Error,
        }
    }
}

/// One step of lexing output: exactly one per code point fed in (except
/// that a completed multi-step escape or literal also reports its decoded
/// value via `extra`/`done`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What kind of step this was.
    pub kind: TokenType,
    /// Where in the document structure this step occurred.
    pub location: Location,
    /// The code point position (0-based) this token was produced for.
    pub index: u64,
    /// Whether a multi-step construct (escape, literal, number) just
    /// completed on this step.
    pub done: bool,
    /// Auxiliary payload: the [`SyntaxError::code`] when `kind` is
    /// [`TokenType::Error`](enum@TokenType); the decoded code point when
    /// `done` is set on a completed escape or literal; `0` otherwise.
    pub extra: u32,
}

impl Token {
    pub(crate) fn new(kind: TokenType, location: Location, index: u64) -> Self {
        Self {
            kind,
            location,
            index,
            done: false,
            extra: 0,
        }
    }

    pub(crate) fn done_with(mut self, extra: u32) -> Self {
        self.done = true;
        self.extra = extra;
        self
    }

    pub(crate) fn error(err: SyntaxError, location: Location, index: u64) -> Self {
        Self {
            kind: TokenType::Error,
            location,
            index,
            done: false,
            extra: u32::from(err.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Token, TokenType};
    use crate::location::Location;

    #[test]
    fn category_recovers_from_type() {
        assert_eq!(TokenType::True.category(), Category::Boolean);
        assert_eq!(TokenType::False.category(), Category::Boolean);
        assert_eq!(TokenType::ArrayNext.category(), Category::Array);
        assert_eq!(TokenType::CommentMultiLineEnd.category(), Category::Comment);
    }

    #[test]
    fn discriminants_match_reference_layout() {
        assert_eq!(TokenType::Error as u32, 0);
        assert_eq!(TokenType::True as u32, 0x41);
        assert_eq!(TokenType::False as u32, 0x40);
        assert_eq!(TokenType::ObjectNext as u32, 0x71);
        assert_eq!(TokenType::ArrayEnd as u32, 0x82);
    }

    #[test]
    fn done_with_sets_payload() {
        let token = Token::new(TokenType::Null, Location::Value, 3).done_with(0x6E);
        assert!(token.done);
        assert_eq!(token.extra, 0x6E);
    }
}
