//! Tracks code point position, line, and column across a stream, with the
//! four-way line-break collapsing JSON5 requires: `\r`, `\r\n`, `\n`,
//! U+2028, and U+2029 each count as exactly one line break, and a `\r`
//! immediately followed by `\n` must not be double-counted.

use crate::error::SyntaxError;

const LINE_SEPARATOR: u32 = 0x2028;
const PARAGRAPH_SEPARATOR: u32 = 0x2029;

/// A 0-based code point position plus 1-based line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Code points consumed so far.
    pub index: u64,
    /// 1-based line number.
    pub line: u64,
    /// 1-based column number.
    pub column: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 1,
        }
    }
}

/// Advances a [`Position`] one code point at a time, collapsing
/// `\r\n` into a single line break.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracker {
    position: Position,
    saw_cr: bool,
}

impl Tracker {
    /// The current position, before the next code point is consumed.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Record that one more code point was consumed, advancing the
    /// position. Must only be called for a code point that produced a
    /// non-error token.
    pub fn advance(&mut self, u: u32) -> Result<(), SyntaxError> {
        self.position.index = self
            .position
            .index
            .checked_add(1)
            .ok_or(SyntaxError::PositionOverflow)?;

        if self.saw_cr && u == u32::from(b'\n') {
            // `\r\n` already counted as one line break when the `\r` was
            // seen; this `\n` only advances the index, done above.
            self.saw_cr = false;
            return Ok(());
        }
        self.saw_cr = false;

        match u {
            0x0D => {
                self.saw_cr = true;
                self.position.line = self
                    .position
                    .line
                    .checked_add(1)
                    .ok_or(SyntaxError::PositionOverflow)?;
                self.position.column = 1;
            }
            0x0A | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
                self.position.line = self
                    .position
                    .line
                    .checked_add(1)
                    .ok_or(SyntaxError::PositionOverflow)?;
                self.position.column = 1;
            }
            _ => {
                self.position.column = self
                    .position
                    .column
                    .checked_add(1)
                    .ok_or(SyntaxError::PositionOverflow)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Tracker;

    fn run(input: &str) -> super::Position {
        let mut tracker = Tracker::default();
        for c in input.chars() {
            tracker.advance(u32::from(c)).unwrap();
        }
        tracker.position()
    }

    #[test]
    fn plain_text_advances_column() {
        let pos = run("abc");
        assert_eq!(pos.index, 3);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 4);
    }

    #[test]
    fn lone_lf_advances_line() {
        let pos = run("a\nb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let pos = run("a\r\nb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.index, 4);
    }

    #[test]
    fn lone_cr_advances_line() {
        let pos = run("a\rb");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn unicode_line_separators_advance_line() {
        let pos = run("a\u{2028}b\u{2029}c");
        assert_eq!(pos.line, 3);
    }
}
