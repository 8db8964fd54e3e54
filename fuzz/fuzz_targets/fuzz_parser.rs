#![no_main]

use jsonpush::{Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

/// Turns one header word into a `ParserOptions` bundle: every JSON5
/// extension this crate exposes is independently toggleable, so each bit
/// just gates one field. A `u32` header is used (not `u16`) because there
/// are 17 independently toggleable options, one more than fits in 16 bits.
fn options_from_flags(flags: u32) -> ParserOptions {
    ParserOptions {
        json5_whitespace: flags & 0x0000_0001 != 0,
        trailing_comma_in_array: flags & 0x0000_0002 != 0,
        trailing_comma_in_object: flags & 0x0000_0004 != 0,
        identifier_key: flags & 0x0000_0008 != 0,
        single_quote: flags & 0x0000_0010 != 0,
        multiline_string: flags & 0x0000_0020 != 0,
        json5_string_escape: flags & 0x0000_0040 != 0,
        positive_sign: flags & 0x0000_0080 != 0,
        empty_fraction: flags & 0x0000_0100 != 0,
        empty_integer: flags & 0x0000_0200 != 0,
        nan: flags & 0x0000_0400 != 0,
        infinity: flags & 0x0000_0800 != 0,
        hexadecimal_integer: flags & 0x0000_1000 != 0,
        octal_integer: flags & 0x0000_2000 != 0,
        binary_integer: flags & 0x0000_4000 != 0,
        single_line_comment: flags & 0x0000_8000 != 0,
        multi_line_comment: flags & 0x0001_0000 != 0,
    }
}

/// Feeds arbitrary bytes through the parser. Invalid UTF-8 is treated as
/// just another way an input stream can fail: decode it ourselves (lossily)
/// so the fuzzer spends its time exercising the lexer's state machine
/// instead of rediscovering "garbage bytes aren't UTF-8".
fn run(flags: u32, text: &str) {
    let mut parser = Parser::new(options_from_flags(flags));
    for c in text.chars().chain(core::iter::once('\u{0}')) {
        if parser.feed_one(u32::from(c)).kind == jsonpush::TokenType::Error {
            break;
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let flags = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let text = String::from_utf8_lossy(&data[4..]);
    run(flags, &text);
});
