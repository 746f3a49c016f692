//! Source spans.
//!
//! The supplier attaches a span to every declaration it hands over so that
//! diagnostics can point back into host source. Generation never reads the
//! bytes behind a span; it only carries spans into diagnostics and sorts by
//! them.

use std::fmt;

/// Half-open byte range `start..end` in host source.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for declarations built without host source.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub const fn is_dummy(self) -> bool {
        self.start == 0 && self.end == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
