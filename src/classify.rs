//! Unicode classification predicates used by the lexer: whitespace and
//! identifier membership.
//!
//! The default build classifies against the Unicode `XID_Start`/`XID_Continue`
//! properties (via the `unicode-xid` crate) plus the JSON identifier
//! extensions (`$`, `_`, and the two zero-width joiners). Building with the
//! `strict-ascii` feature swaps in a four-character whitespace set and an
//! ASCII-only identifier alphabet for callers that only ever see ASCII
//! input and want to skip linking the Unicode tables.

#[cfg(not(feature = "strict-ascii"))]
use unicode_xid::UnicodeXID;

/// Extra whitespace code points recognized only when `json5` is enabled:
/// vertical tab, form feed, NBSP, BOM, and the remaining Unicode `Zs`/line/
/// paragraph separators. Kept in ascending order for binary search.
#[cfg(not(feature = "strict-ascii"))]
const EXTRA_WHITESPACE: &[u32] = &[
    0x0B, 0x0C, 0xA0, 0x1680, 0x2000, 0x2001, 0x2002, 0x2003, 0x2004, 0x2005, 0x2006, 0x2007,
    0x2008, 0x2009, 0x200A, 0x2028, 0x2029, 0x202F, 0x205F, 0x3000, 0xFEFF,
];

/// Whether `u` is whitespace. The four ASCII whitespace characters (tab, LF,
/// CR, space) are always accepted; with `json5` set, the full Unicode
/// whitespace set is accepted as well, via binary search over the sorted
/// [`EXTRA_WHITESPACE`] table.
#[must_use]
pub fn is_whitespace(u: u32, json5: bool) -> bool {
    if matches!(u, 0x09 | 0x0A | 0x0D | 0x20) {
        return true;
    }
    #[cfg(not(feature = "strict-ascii"))]
    {
        json5 && EXTRA_WHITESPACE.binary_search(&u).is_ok()
    }
    #[cfg(feature = "strict-ascii")]
    {
        let _ = json5;
        false
    }
}

/// Whether `u` may begin an identifier: Unicode `ID_Start` plus `$` and `_`.
#[must_use]
pub fn is_identifier_start(u: u32) -> bool {
    if matches!(u, 0x24 | 0x5F) {
        return true;
    }
    #[cfg(not(feature = "strict-ascii"))]
    {
        char::from_u32(u).is_some_and(UnicodeXID::is_xid_start)
    }
    #[cfg(feature = "strict-ascii")]
    {
        u.is_ascii_alphabetic()
    }
}

/// Whether `u` may continue an identifier after its first character:
/// `is_identifier_start` plus Unicode `ID_Continue` plus the two zero-width
/// joiners (U+200C, U+200D).
#[must_use]
pub fn is_identifier_continue(u: u32) -> bool {
    if is_identifier_start(u) {
        return true;
    }
    #[cfg(not(feature = "strict-ascii"))]
    {
        if matches!(u, 0x200C | 0x200D) {
            return true;
        }
        char::from_u32(u).is_some_and(UnicodeXID::is_xid_continue)
    }
    #[cfg(feature = "strict-ascii")]
    {
        u.is_ascii_digit()
    }
}

#[cfg(test)]
mod tests {
    use super::{is_identifier_continue, is_identifier_start, is_whitespace};

    #[test]
    fn ascii_whitespace_always_accepted() {
        for u in [0x09, 0x0A, 0x0D, 0x20] {
            assert!(is_whitespace(u, false));
            assert!(is_whitespace(u, true));
        }
    }

    #[test]
    fn non_whitespace_rejected() {
        assert!(!is_whitespace(0x41, false));
        assert!(!is_whitespace(0x41, true));
    }

    #[test]
    fn dollar_and_underscore_start_identifiers() {
        assert!(is_identifier_start(u32::from('$')));
        assert!(is_identifier_start(u32::from('_')));
    }

    #[test]
    fn digits_do_not_start_identifiers_but_continue_them() {
        assert!(!is_identifier_start(u32::from('9')));
        assert!(is_identifier_continue(u32::from('9')));
    }

    #[test]
    fn ascii_letters_start_and_continue() {
        assert!(is_identifier_start(u32::from('a')));
        assert!(is_identifier_continue(u32::from('Z')));
    }

    #[cfg(not(feature = "strict-ascii"))]
    #[test]
    fn json5_whitespace_extras() {
        assert!(!is_whitespace(0xA0, false));
        assert!(is_whitespace(0xA0, true));
        assert!(is_whitespace(0x2028, true));
    }

    #[cfg(not(feature = "strict-ascii"))]
    #[test]
    fn zero_width_joiners_continue_but_never_start() {
        assert!(!is_identifier_start(0x200C));
        assert!(is_identifier_continue(0x200C));
    }
}
