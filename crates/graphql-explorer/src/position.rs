use serde::{Deserialize, Serialize};

/// Position in a document (0-indexed).
///
/// `character` counts Unicode scalar values within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Half-open byte range `[start, end)` into a document's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl OffsetRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width range at `offset`
    #[must_use]
    pub const fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether `other` lies within this range, boundaries included
    #[must_use]
    pub const fn encloses(&self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<apollo_parser::TextRange> for OffsetRange {
    fn from(range: apollo_parser::TextRange) -> Self {
        Self {
            start: range.start().into(),
            end: range.end().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encloses_is_inclusive() {
        let definition = OffsetRange::new(10, 20);
        assert!(definition.encloses(OffsetRange::new(10, 12)));
        assert!(definition.encloses(OffsetRange::new(18, 20)));
        assert!(definition.encloses(OffsetRange::new(10, 20)));
        assert!(definition.encloses(OffsetRange::empty(20)));
        assert!(!definition.encloses(OffsetRange::new(9, 12)));
        assert!(!definition.encloses(OffsetRange::new(19, 21)));
    }

    #[test]
    fn test_len() {
        assert_eq!(OffsetRange::new(3, 8).len(), 5);
        assert!(OffsetRange::empty(4).is_empty());
    }
}
