//! The lexer's error taxonomy.

use thiserror::Error;

/// Everything that can go wrong while lexing. Carried as the payload of an
/// `ERROR` [`crate::Token`]; the lexer does not attempt recovery after
/// emitting one, and the caller should discard or reset the parser.
///
/// Each variant's [`SyntaxError::code`] is a stable numeric discriminant,
/// grouped by category: resource errors and encoding errors occupy the low
/// range, everything else starts at `0x80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    // --- resource ---
    /// The growable nesting stack failed to allocate.
    #[error("allocation failed")]
    AllocFailed,
    /// The nesting stack reached its fixed capacity.
    #[error("too many nested arrays/objects")]
    TooManyRecursions,
    /// The code point counter would overflow.
    #[error("position counter overflowed")]
    PositionOverflow,

    // --- encoding ---
    /// An input code point was a surrogate or exceeded `U+10FFFF`.
    #[error("invalid input code point")]
    InvalidInputUtf,
    /// A decoded `\uXXXX` escape was a lone surrogate with recombination
    /// disabled (or the low half of a pair was out of range).
    #[error("invalid escaped code point")]
    InvalidEscapedUtf,
    /// A high surrogate escape was not followed by a valid low surrogate
    /// escape.
    #[error("incomplete surrogate pair")]
    IncompleteSurrogatePair,

    // --- structure ---
    /// `/` seen but no comment option is enabled.
    #[error("comments are not enabled")]
    CommentForbidden,
    /// The EOF sentinel arrived while a value was still open.
    #[error("unexpected end of input")]
    Eof,
    /// Non-whitespace content followed a complete root value.
    #[error("non-whitespace content after the root value")]
    NonwhitespaceAfterEnd,
    /// A code point arrived after EOF was already signalled.
    #[error("content after end of input")]
    ContentAfterEof,
    /// A trailing comma was seen without the matching option enabled.
    #[error("trailing comma is not enabled")]
    TrailingCommaForbidden,
    /// A code point did not fit any valid transition from the current state.
    #[error("unexpected character")]
    Unexpected,
    /// A closing bracket did not match the kind of the enclosing aggregate.
    #[error("mismatched bracket")]
    WrongBracket,
    /// A `:` appeared outside of `KEY_END`.
    #[error("unexpected colon")]
    WrongColon,

    // --- array ---
    /// A comma appeared as the first token inside `[ ]`.
    #[error("comma in an empty array")]
    CommaInEmptyArray,

    // --- object ---
    /// A `\` escape inside an identifier key was not followed by `u`.
    #[error("bad identifier escape")]
    BadIdentifierEscape,
    /// An object key was neither a string nor (with the option) an
    /// identifier.
    #[error("bad property name in object")]
    BadPropertyNameInObject,
    /// A comma appeared as the first token inside `{ }`.
    #[error("comma in an empty object")]
    CommaInEmptyObject,
    /// A comma appeared immediately after `:`.
    #[error("empty value in object")]
    EmptyValueInObject,
    /// A key was not followed by `:`.
    #[error("expected colon after object key")]
    ExpectedColon,
    /// An identifier key contained a character outside
    /// `is_identifier_continue`.
    #[error("invalid identifier character")]
    InvalidIdentifier,
    /// An identifier key's `\uXXXX` escape decoded to a surrogate.
    #[error("invalid identifier escape")]
    InvalidIdentifierEscape,
    /// A second `:` appeared for the same key.
    #[error("repeated colon")]
    RepeatedColon,

    // --- string ---
    /// An escape character after `\` was not a recognized one-character
    /// escape, `u`, or (JSON5) `x`/line terminator.
    #[error("bad escape in string")]
    BadEscapeInString,
    /// A `\xXX` escape's hex digits were invalid.
    #[error("bad hex escape in string")]
    BadHexEscapeInString,
    /// A `\uXXXX` escape's hex digits were invalid.
    #[error("bad unicode escape in string")]
    BadUnicodeEscapeInString,
    /// A raw control character (U+0000..=U+001F or U+007F) appeared
    /// unescaped inside a string.
    #[error("control character forbidden in string")]
    ControlCharacterForbiddenInString,
    /// A `'`-quoted string was seen without the matching option enabled.
    #[error("single-quoted strings are not enabled")]
    SingleQuoteForbidden,

    // --- number ---
    /// An exponent marker (`e`/`E`) was not followed by any digits.
    #[error("empty exponent part")]
    EmptyExponentPart,
    /// A decimal point was not followed by any digits (without
    /// `empty_fraction`).
    #[error("empty fraction part")]
    EmptyFractionPart,
    /// A number had no digits before the decimal point or exponent (without
    /// `empty_integer`).
    #[error("empty integer part")]
    EmptyIntegerPart,
    /// An `e`/`E` exponent marker appeared in an octal or binary literal.
    #[error("exponent not allowed here")]
    ExponentNotAllowed,
    /// A `.` appeared in a hex/octal/binary literal.
    #[error("fraction not allowed here")]
    FractionNotAllowed,
    /// A non-zero integer part began with `0`.
    #[error("leading zero forbidden")]
    LeadingZeroForbidden,
    /// A leading `+` sign was seen without the matching option enabled.
    #[error("positive sign is not enabled")]
    PositiveSignForbidden,
    /// A code point did not fit any valid transition inside a number.
    #[error("unexpected character in number")]
    UnexpectedInNumber,
}

impl SyntaxError {
    /// The stable numeric code for this error, for callers that want to
    /// match on an integer instead of the enum (FFI boundaries, logging).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::AllocFailed => 1,
            Self::TooManyRecursions => 2,
            Self::PositionOverflow => 3,
            Self::InvalidInputUtf => 4,
            Self::InvalidEscapedUtf => 5,
            Self::IncompleteSurrogatePair => 6,

            Self::CommentForbidden => 0x80,
            Self::Eof => 0x81,
            Self::NonwhitespaceAfterEnd => 0x82,
            Self::ContentAfterEof => 0x83,
            Self::TrailingCommaForbidden => 0x84,
            Self::Unexpected => 0x85,
            Self::WrongBracket => 0x86,
            Self::WrongColon => 0x87,

            Self::CommaInEmptyArray => 0x88,

            Self::BadIdentifierEscape => 0x89,
            Self::BadPropertyNameInObject => 0x8A,
            Self::CommaInEmptyObject => 0x8B,
            Self::EmptyValueInObject => 0x8C,
            Self::ExpectedColon => 0x8D,
            Self::InvalidIdentifier => 0x8E,
            Self::InvalidIdentifierEscape => 0x8F,
            Self::RepeatedColon => 0x90,

            Self::BadEscapeInString => 0x91,
            Self::BadHexEscapeInString => 0x92,
            Self::BadUnicodeEscapeInString => 0x93,
            Self::ControlCharacterForbiddenInString => 0x94,
            Self::SingleQuoteForbidden => 0x95,

            Self::EmptyExponentPart => 0x96,
            Self::EmptyFractionPart => 0x97,
            Self::EmptyIntegerPart => 0x98,
            Self::ExponentNotAllowed => 0x99,
            Self::FractionNotAllowed => 0x9A,
            Self::LeadingZeroForbidden => 0x9B,
            Self::PositiveSignForbidden => 0x9C,
            Self::UnexpectedInNumber => 0x9D,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxError;

    #[test]
    fn codes_are_stable_and_grouped() {
        assert_eq!(SyntaxError::AllocFailed.code(), 1);
        assert_eq!(SyntaxError::IncompleteSurrogatePair.code(), 6);
        assert_eq!(SyntaxError::CommentForbidden.code(), 0x80);
        assert_eq!(SyntaxError::UnexpectedInNumber.code(), 0x9D);
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(SyntaxError::Eof.to_string(), "unexpected end of input");
    }
}
