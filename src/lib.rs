//! A push-driven, incremental tokenizer for JSON and JSON5 text.
//!
//! Feed it one Unicode scalar value (or the [`codepoint::EOF`] sentinel) at
//! a time via [`Parser::feed_one`] and get back exactly one [`Token`] per
//! code point — no buffering, no tree, no per-token heap allocation. The
//! nesting stack and JSON5 option gates are the only state the parser
//! carries beyond what fits in a handful of registers.
//!
//! # Examples
//!
//! ```rust
//! use jsonpush::{Parser, ParserOptions, TokenType};
//!
//! let mut parser = Parser::new(ParserOptions::json5());
//! let mut saw_error = false;
//! for c in "{a: 1, b: [2, 3,],}".chars().chain(core::iter::once('\u{0}')) {
//!     if parser.feed_one(u32::from(c)).kind == TokenType::Error {
//!         saw_error = true;
//!     }
//! }
//! assert!(!saw_error);
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
/// The input code point type and its EOF sentinel, exposed so callers can
/// reason about what `u32` values [`Parser::feed_one`] accepts.
pub mod codepoint;
mod decode;
mod error;
mod escape;
mod literal;
mod location;
mod options;
mod parser;
mod position;
mod stack;
mod token;

pub use decode::{encode_utf16, encode_utf8, DecodeStep, Utf16Decoder, Utf8Decoder};
pub use error::SyntaxError;
pub use location::Location;
pub use options::ParserOptions;
pub use parser::{Parser, Stage};
pub use position::Position;
pub use token::{Category, Token, TokenType};
