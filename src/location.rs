//! The location cursor: where in the document structure the next code
//! point is expected.

/// The internal, fine-grained location cursor. The `*_FIRST_START` variants
/// distinguish the first slot of an aggregate (where a closing bracket is
/// legal but a comma is not) from later slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Before any value has been seen at the document root.
    RootStart,
    /// The first key slot of a freshly opened object.
    KeyFirstStart,
    /// A key slot after at least one member.
    KeyStart,
    /// Right after a key's closing quote/identifier, before `:`.
    KeyEnd,
    /// Right after `:`, before the value.
    ValueStart,
    /// After a complete object value, before `,` or `}`.
    ValueEnd,
    /// The first element slot of a freshly opened array.
    ElementFirstStart,
    /// An element slot after at least one member.
    ElementStart,
    /// After a complete array element, before `,` or `]`.
    ElementEnd,
    /// After the root value has completed.
    RootEnd,
    /// Terminal: the EOF sentinel has been consumed.
    Eof,
}

/// The coarse, publicly exposed location tag attached to each [`crate::Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The document root, before or after its one value.
    Root,
    /// An object key.
    Key,
    /// An object value.
    Value,
    /// An array element.
    Element,
    /// A structural array token (`[`, `]`, `,`).
    Array,
    /// A structural object token (`{`, `}`, `,`, `:`).
    Object,
}

impl Cursor {
    /// Advances a `*_START` cursor to its matching `*_END` once a full
    /// value has just been recognized there. Only meaningful for the six
    /// `*_START` variants; any other variant is returned unchanged.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::RootStart => Self::RootEnd,
            Self::KeyFirstStart | Self::KeyStart => Self::KeyEnd,
            Self::ValueStart => Self::ValueEnd,
            Self::ElementFirstStart | Self::ElementStart => Self::ElementEnd,
            other => other,
        }
    }

    /// Collapses the 11-variant cursor down to the 6-variant public
    /// [`Location`].
    #[must_use]
    pub fn coarsen(self) -> Location {
        match self {
            Self::RootStart | Self::RootEnd | Self::Eof => Location::Root,
            Self::KeyFirstStart | Self::KeyStart | Self::KeyEnd => Location::Key,
            Self::ValueStart | Self::ValueEnd => Location::Value,
            Self::ElementFirstStart | Self::ElementStart | Self::ElementEnd => Location::Element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, Location};

    #[test]
    fn next_maps_start_to_matching_end() {
        assert_eq!(Cursor::RootStart.next(), Cursor::RootEnd);
        assert_eq!(Cursor::KeyFirstStart.next(), Cursor::KeyEnd);
        assert_eq!(Cursor::KeyStart.next(), Cursor::KeyEnd);
        assert_eq!(Cursor::ValueStart.next(), Cursor::ValueEnd);
        assert_eq!(Cursor::ElementFirstStart.next(), Cursor::ElementEnd);
        assert_eq!(Cursor::ElementStart.next(), Cursor::ElementEnd);
    }

    #[test]
    fn coarsen_collapses_to_public_tags() {
        assert_eq!(Cursor::RootStart.coarsen(), Location::Root);
        assert_eq!(Cursor::Eof.coarsen(), Location::Root);
        assert_eq!(Cursor::KeyEnd.coarsen(), Location::Key);
        assert_eq!(Cursor::ValueStart.coarsen(), Location::Value);
        assert_eq!(Cursor::ElementFirstStart.coarsen(), Location::Element);
    }
}
