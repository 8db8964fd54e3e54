#![allow(clippy::struct_excessive_bools)]

//! Configuration for the JSON5 extensions the lexer will accept.
//!
//! Every extension is independently toggleable and defaults to `false`
//! (strict JSON). Options are read once at construction; the lexer does not
//! support changing them mid-parse.
//!
//! # Examples
//!
//! ```rust
//! use jsonpush::{Parser, ParserOptions};
//!
//! let options = ParserOptions {
//!     trailing_comma_in_array: true,
//!     ..Default::default()
//! };
//! let mut parser = Parser::new(options);
//! ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Accept the full Unicode whitespace set between tokens, not just the
    /// four ASCII whitespace characters.
    ///
    /// # Default
    ///
    /// `false`
    pub json5_whitespace: bool,

    /// Accept a trailing comma before `]`.
    ///
    /// # Examples
    ///
    /// ```json5
    /// [1, 2, 3,]
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub trailing_comma_in_array: bool,

    /// Accept a trailing comma before `}`.
    ///
    /// # Default
    ///
    /// `false`
    pub trailing_comma_in_object: bool,

    /// Accept unquoted identifier object keys.
    ///
    /// # Examples
    ///
    /// ```json5
    /// { foo: 1 }
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub identifier_key: bool,

    /// Accept single-quoted strings (`'...'`) in addition to `"..."`.
    ///
    /// # Default
    ///
    /// `false`
    pub single_quote: bool,

    /// Accept an escaped line terminator inside a string (`\` followed by a
    /// line break) as a line continuation rather than an error.
    ///
    /// # Default
    ///
    /// `false`
    pub multiline_string: bool,

    /// Accept the JSON5 string escapes beyond the JSON set: `\'`, `\v`, `\0`,
    /// and `\xXX`.
    ///
    /// # Default
    ///
    /// `false`
    pub json5_string_escape: bool,

    /// Accept a leading `+` sign on a number.
    ///
    /// # Default
    ///
    /// `false`
    pub positive_sign: bool,

    /// Accept a number with no digits after the decimal point (`1.`).
    ///
    /// # Default
    ///
    /// `false`
    pub empty_fraction: bool,

    /// Accept a number with no digits before the decimal point (`.5`).
    ///
    /// # Default
    ///
    /// `false`
    pub empty_integer: bool,

    /// Accept the bare identifier `NaN` as a number.
    ///
    /// # Default
    ///
    /// `false`
    pub nan: bool,

    /// Accept the bare identifier `Infinity` as a number.
    ///
    /// # Default
    ///
    /// `false`
    pub infinity: bool,

    /// Accept `0x`/`0X`-prefixed hexadecimal integers.
    ///
    /// # Default
    ///
    /// `false`
    pub hexadecimal_integer: bool,

    /// Accept `0o`/`0O`-prefixed octal integers.
    ///
    /// # Default
    ///
    /// `false`
    pub octal_integer: bool,

    /// Accept `0b`/`0B`-prefixed binary integers.
    ///
    /// # Default
    ///
    /// `false`
    pub binary_integer: bool,

    /// Accept `//` line comments.
    ///
    /// # Default
    ///
    /// `false`
    pub single_line_comment: bool,

    /// Accept `/* ... */` block comments.
    ///
    /// # Default
    ///
    /// `false`
    pub multi_line_comment: bool,
}

impl ParserOptions {
    /// All extensions disabled: strict JSON.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            json5_whitespace: false,
            trailing_comma_in_array: false,
            trailing_comma_in_object: false,
            identifier_key: false,
            single_quote: false,
            multiline_string: false,
            json5_string_escape: false,
            positive_sign: false,
            empty_fraction: false,
            empty_integer: false,
            nan: false,
            infinity: false,
            hexadecimal_integer: false,
            octal_integer: false,
            binary_integer: false,
            single_line_comment: false,
            multi_line_comment: false,
        }
    }

    /// The full JSON5 extension bundle, as specified by the JSON5 grammar.
    #[must_use]
    pub const fn json5() -> Self {
        Self {
            json5_whitespace: true,
            trailing_comma_in_array: true,
            trailing_comma_in_object: true,
            identifier_key: true,
            single_quote: true,
            multiline_string: true,
            json5_string_escape: true,
            positive_sign: true,
            empty_fraction: true,
            empty_integer: true,
            nan: true,
            infinity: true,
            hexadecimal_integer: true,
            octal_integer: false,
            binary_integer: false,
            single_line_comment: true,
            multi_line_comment: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParserOptions;

    #[test]
    fn strict_disables_everything() {
        assert_eq!(ParserOptions::strict(), ParserOptions::default());
    }

    #[test]
    fn json5_enables_the_documented_bundle() {
        let opts = ParserOptions::json5();
        assert!(opts.identifier_key);
        assert!(opts.trailing_comma_in_array);
        assert!(!opts.octal_integer);
    }
}
